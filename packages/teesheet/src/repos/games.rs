//! Game roster records, keyed `game / [groundID, gameNumber]`.

use crate::entities::GameRoster;
use crate::errors::domain::DomainError;
use crate::ledger::{Ledger, LedgerKey};

const CATEGORY: &str = "game";

fn roster_key(ground_id: &str, game_number: &str) -> Result<LedgerKey, DomainError> {
    LedgerKey::new(CATEGORY, &[ground_id, game_number]).map_err(DomainError::from)
}

pub async fn save<L: Ledger + ?Sized>(ledger: &L, roster: &GameRoster) -> Result<(), DomainError> {
    let key = roster_key(&roster.ground_id, &roster.game_number)?;
    ledger.put(&key, super::encode(CATEGORY, roster)?).await?;
    Ok(())
}

pub async fn find<L: Ledger + ?Sized>(
    ledger: &L,
    ground_id: &str,
    game_number: &str,
) -> Result<Option<GameRoster>, DomainError> {
    let key = roster_key(ground_id, game_number)?;
    match ledger.get(&key).await? {
        None => Ok(None),
        Some(bytes) => super::decode(CATEGORY, &bytes).map(Some),
    }
}
