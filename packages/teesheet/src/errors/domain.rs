//! Domain-level error model.
//!
//! `DomainError` is the error every repo and service operation returns. It is
//! host-agnostic: nothing here knows about transports, status codes, or the
//! concrete ledger backing the contract. Kind sub-enums are `non_exhaustive`
//! so hosts matching on them keep compiling when a variant is added.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::ledger::LedgerError;

/// What kind of record a lookup failed to find.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Ground,
    Game,
    Score,
    Agreement,
    Other(String),
}

/// Why a caller-supplied argument was unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// A begin/end argument was not an RFC 3339 instant.
    MalformedTimestamp,
    /// A window ended at or before its own begin.
    EmptyWindow,
    /// A seat number outside the fixed 1..=4 range.
    InvalidSeat,
    /// An identifier unusable as a ledger key segment.
    InvalidKeySegment,
    Other(String),
}

/// Failures of the machinery under the domain, not of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// The ledger backend reported a get/put/scan/event failure.
    Store,
    /// A stored record did not encode or decode as its type.
    DataCorruption,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request itself was malformed.
    Validation(ValidationKind, String),
    /// The record a read operation asked for is not on the ledger.
    NotFound(NotFoundKind, String),
    /// The ledger is not in a state that permits the transition.
    Precondition(String),
    /// Storage or serialization machinery failed.
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn precondition(detail: impl Into<String>) -> Self {
        Self::Precondition(detail.into())
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Validation(kind, detail) => write!(f, "validation ({kind:?}): {detail}"),
            Self::NotFound(kind, detail) => write!(f, "not found ({kind:?}): {detail}"),
            Self::Precondition(detail) => write!(f, "precondition failed: {detail}"),
            Self::Infra(kind, detail) => write!(f, "infra ({kind:?}): {detail}"),
        }
    }
}

impl Error for DomainError {}

impl From<LedgerError> for DomainError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidKey(detail) => {
                Self::validation(ValidationKind::InvalidKeySegment, detail)
            }
            backend @ LedgerError::Backend { .. } => {
                Self::infra(InfraErrorKind::Store, backend.to_string())
            }
        }
    }
}
