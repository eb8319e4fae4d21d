//! Typed ledger access, one module per record family.
//!
//! Repos are free async functions generic over any `L: Ledger + ?Sized`.
//! They own key construction and the JSON encoding of records; serde
//! failures in either direction surface as `Infra(DataCorruption)` so a
//! mangled record is distinguishable from an absent one.

pub mod agreements;
pub mod counters;
pub mod games;
pub mod grounds;
pub mod reservations;
pub mod scores;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::domain::{DomainError, InfraErrorKind};

pub(crate) fn encode<T: Serialize>(what: &'static str, value: &T) -> Result<Vec<u8>, DomainError> {
    serde_json::to_vec(value).map_err(|err| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("{what} record could not be encoded: {err}"),
        )
    })
}

pub(crate) fn decode<T: DeserializeOwned>(
    what: &'static str,
    bytes: &[u8],
) -> Result<T, DomainError> {
    serde_json::from_slice(bytes).map_err(|err| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("stored {what} record is not decodable: {err}"),
        )
    })
}
