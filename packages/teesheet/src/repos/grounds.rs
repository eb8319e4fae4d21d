//! Ground records, keyed `ground / [groundID]`.

use crate::entities::Ground;
use crate::errors::domain::DomainError;
use crate::ledger::{Ledger, LedgerKey};

const CATEGORY: &str = "ground";

fn ground_key(ground_id: &str) -> Result<LedgerKey, DomainError> {
    LedgerKey::new(CATEGORY, &[ground_id]).map_err(DomainError::from)
}

pub async fn save<L: Ledger + ?Sized>(ledger: &L, ground: &Ground) -> Result<(), DomainError> {
    let key = ground_key(&ground.ground_id)?;
    ledger.put(&key, super::encode(CATEGORY, ground)?).await?;
    Ok(())
}

pub async fn find<L: Ledger + ?Sized>(
    ledger: &L,
    ground_id: &str,
) -> Result<Option<Ground>, DomainError> {
    let key = ground_key(ground_id)?;
    match ledger.get(&key).await? {
        None => Ok(None),
        Some(bytes) => super::decode(CATEGORY, &bytes).map(Some),
    }
}

/// Every registered ground, in key order.
pub async fn find_all<L: Ledger + ?Sized>(ledger: &L) -> Result<Vec<Ground>, DomainError> {
    let records = ledger.scan_prefix(CATEGORY, &[]).await?;
    records
        .iter()
        .map(|(_, bytes)| super::decode(CATEGORY, bytes))
        .collect()
}
