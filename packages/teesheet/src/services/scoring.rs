//! Score submission and the agreement consensus.
//!
//! A hole's score starts tentative and is promoted to validated exactly
//! when all four seats have recorded the agreement literal. Promotion is
//! one-way: later mark changes never demote a validated score.

use tracing::{debug, info};

use crate::domain::{consensus, Seat};
use crate::entities::{Agreement, HoleScore};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::ledger::Ledger;
use crate::repos::{agreements, scores};

pub struct ScoringService;

impl ScoringService {
    pub fn new() -> Self {
        Self
    }

    /// Record one seat's score for a hole, creating the scorecard line on
    /// first touch. Resubmission overwrites the seat's previous score.
    pub async fn submit_score<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        game_number: &str,
        hole_number: &str,
        seat_number: u8,
        score: &str,
    ) -> Result<HoleScore, DomainError> {
        let seat = Seat::new(seat_number)?;
        let mut sheet = scores::find(ledger, game_number, hole_number)
            .await?
            .unwrap_or_else(|| HoleScore::fresh(hole_number));
        sheet.scores.set(seat, score.to_string());
        scores::save(ledger, game_number, &sheet).await?;
        debug!(game_number, hole_number, seat = %seat, "score recorded");
        Ok(sheet)
    }

    /// Record one seat's agreement mark for a hole.
    ///
    /// When the updated marks are unanimous, the hole's score is promoted
    /// before the marks themselves are persisted; either way the marks are
    /// saved. Any mark other than the agreement literal simply withholds
    /// unanimity.
    pub async fn submit_agreement<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        game_number: &str,
        hole_number: &str,
        seat_number: u8,
        mark: &str,
    ) -> Result<Agreement, DomainError> {
        let seat = Seat::new(seat_number)?;
        let mut agreement = agreements::find(ledger, game_number, hole_number)
            .await?
            .unwrap_or_else(|| Agreement::fresh(hole_number));
        agreement.marks.set(seat, mark.to_string());

        if consensus::unanimous(&agreement.marks) {
            info!(game_number, hole_number, "all four seats agree, validating score");
            self.promote_score(ledger, game_number, hole_number).await?;
        }

        agreements::save(ledger, game_number, &agreement).await?;
        Ok(agreement)
    }

    /// Promote a hole's score on the strength of already-recorded marks.
    ///
    /// Re-reads the agreement record and fails the precondition unless it
    /// exists and is unanimous right now.
    pub async fn validate_score<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        game_number: &str,
        hole_number: &str,
    ) -> Result<(), DomainError> {
        let agreed = agreements::find(ledger, game_number, hole_number)
            .await?
            .is_some_and(|a| consensus::unanimous(&a.marks));
        if !agreed {
            return Err(DomainError::precondition(format!(
                "hole {hole_number} of {game_number} lacks agreement from all four seats"
            )));
        }
        self.promote_score(ledger, game_number, hole_number).await
    }

    pub async fn query_score<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        game_number: &str,
        hole_number: &str,
    ) -> Result<HoleScore, DomainError> {
        scores::find(ledger, game_number, hole_number)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Score,
                    format!("hole {hole_number} of {game_number} has no submitted score"),
                )
            })
    }

    pub async fn query_agreement<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        game_number: &str,
        hole_number: &str,
    ) -> Result<Agreement, DomainError> {
        agreements::find(ledger, game_number, hole_number)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Agreement,
                    format!("hole {hole_number} of {game_number} has no agreement record"),
                )
            })
    }

    /// Every validated hole of a game, in key order (hole numbers compare
    /// as text). Tentative holes are filtered out; a game with no
    /// validated holes yields an empty list, not an error.
    pub async fn query_total_score<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        game_number: &str,
    ) -> Result<Vec<HoleScore>, DomainError> {
        let mut holes = scores::find_for_game(ledger, game_number).await?;
        holes.retain(|hole| hole.validated);
        Ok(holes)
    }

    /// The tentative-to-validated transition. A missing scorecard line is
    /// a no-op: agreement on a hole nobody scored validates nothing.
    async fn promote_score<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        game_number: &str,
        hole_number: &str,
    ) -> Result<(), DomainError> {
        let Some(mut sheet) = scores::find(ledger, game_number, hole_number).await? else {
            return Ok(());
        };
        sheet.validated = true;
        scores::save(ledger, game_number, &sheet).await?;
        Ok(())
    }
}

impl Default for ScoringService {
    fn default() -> Self {
        Self::new()
    }
}
