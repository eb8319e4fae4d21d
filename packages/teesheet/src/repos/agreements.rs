//! Agreement records, keyed `agreement / [gameNumber, holeNumber]`.

use crate::entities::Agreement;
use crate::errors::domain::DomainError;
use crate::ledger::{Ledger, LedgerKey};

const CATEGORY: &str = "agreement";

fn agreement_key(game_number: &str, hole_number: &str) -> Result<LedgerKey, DomainError> {
    LedgerKey::new(CATEGORY, &[game_number, hole_number]).map_err(DomainError::from)
}

pub async fn save<L: Ledger + ?Sized>(
    ledger: &L,
    game_number: &str,
    agreement: &Agreement,
) -> Result<(), DomainError> {
    let key = agreement_key(game_number, &agreement.hole_number)?;
    ledger.put(&key, super::encode(CATEGORY, agreement)?).await?;
    Ok(())
}

pub async fn find<L: Ledger + ?Sized>(
    ledger: &L,
    game_number: &str,
    hole_number: &str,
) -> Result<Option<Agreement>, DomainError> {
    let key = agreement_key(game_number, hole_number)?;
    match ledger.get(&key).await? {
        None => Ok(None),
        Some(bytes) => super::decode(CATEGORY, &bytes).map(Some),
    }
}
