//! Game roster assembly.
//!
//! Players of one booking party join a game by presenting the same game
//! code. Joins converge on the current game number while it still names
//! this party's roster; otherwise the sequence advances and the join
//! starts the next party under the fresh number.

use tracing::info;

use crate::domain::Seat;
use crate::entities::counters::Counter;
use crate::entities::GameRoster;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::ledger::Ledger;
use crate::repos::{counters, games};

pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Seat a player in the game their code belongs to, creating the game
    /// on the first join.
    ///
    /// The game number comes from the shared game sequence: a join converges
    /// on the current number only while this ground's roster under it
    /// carries the same code. Any other state advances the sequence and
    /// starts a blank roster, so each party scores under a number of its
    /// own. Seats are overwritten silently and readiness follows the fourth
    /// seat's occupant. Returns the updated roster.
    pub async fn join_game<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        ground_id: &str,
        user_id: &str,
        seat_number: u8,
        game_code: &str,
    ) -> Result<GameRoster, DomainError> {
        let seat = Seat::new(seat_number)?;

        let joined = match counters::current(ledger, Counter::Games).await? {
            Some(record) => match games::find(ledger, ground_id, &record.number()).await? {
                Some(roster) if roster.game_code == game_code => Some(roster),
                _ => None,
            },
            None => None,
        };

        let mut roster = match joined {
            Some(found) => found,
            None => {
                let minted = counters::next_in_sequence(ledger, Counter::Games).await?;
                GameRoster::fresh(ground_id, &minted.number(), game_code)
            }
        };
        roster.seat_player(seat, user_id);
        games::save(ledger, &roster).await?;
        info!(
            ground_id,
            game_number = roster.game_number.as_str(),
            seat = %seat,
            is_ready = roster.is_ready,
            "player seated"
        );
        Ok(roster)
    }

    pub async fn query_game<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        ground_id: &str,
        game_number: &str,
    ) -> Result<GameRoster, DomainError> {
        games::find(ledger, ground_id, game_number)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Game,
                    format!("game {game_number} on ground {ground_id} does not exist"),
                )
            })
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
