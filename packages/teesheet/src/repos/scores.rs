//! Hole score records, keyed `holeScore / [gameNumber, holeNumber]`.
//!
//! The game number lives only in the key, so writes take it alongside the
//! record.

use crate::entities::HoleScore;
use crate::errors::domain::DomainError;
use crate::ledger::{Ledger, LedgerKey};

const CATEGORY: &str = "holeScore";

fn score_key(game_number: &str, hole_number: &str) -> Result<LedgerKey, DomainError> {
    LedgerKey::new(CATEGORY, &[game_number, hole_number]).map_err(DomainError::from)
}

pub async fn save<L: Ledger + ?Sized>(
    ledger: &L,
    game_number: &str,
    score: &HoleScore,
) -> Result<(), DomainError> {
    let key = score_key(game_number, &score.hole_number)?;
    ledger.put(&key, super::encode(CATEGORY, score)?).await?;
    Ok(())
}

pub async fn find<L: Ledger + ?Sized>(
    ledger: &L,
    game_number: &str,
    hole_number: &str,
) -> Result<Option<HoleScore>, DomainError> {
    let key = score_key(game_number, hole_number)?;
    match ledger.get(&key).await? {
        None => Ok(None),
        Some(bytes) => super::decode(CATEGORY, &bytes).map(Some),
    }
}

/// Every scored hole of one game, ordered by hole number as text
/// (hole `10` before hole `2`, per encoded-key order).
pub async fn find_for_game<L: Ledger + ?Sized>(
    ledger: &L,
    game_number: &str,
) -> Result<Vec<HoleScore>, DomainError> {
    let records = ledger.scan_prefix(CATEGORY, &[game_number]).await?;
    records
        .iter()
        .map(|(_, bytes)| super::decode(CATEGORY, bytes))
        .collect()
}
