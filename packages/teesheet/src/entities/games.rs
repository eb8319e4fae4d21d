//! Game rosters.

use serde::{Deserialize, Serialize};

use crate::domain::{Foursome, Seat};

/// The accumulating four-seat roster of one game on one ground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRoster {
    #[serde(rename = "groundID")]
    pub ground_id: String,
    /// Minted game number, e.g. `GAME3`.
    pub game_number: String,
    /// Seat-indexed player identifiers.
    pub players: Foursome<String>,
    /// The reservation display code this party joined under.
    pub game_code: String,
    pub is_ready: bool,
}

impl GameRoster {
    /// Blank roster under a game number, before anyone is seated.
    pub fn fresh(ground_id: &str, game_number: &str, game_code: &str) -> Self {
        Self {
            ground_id: ground_id.to_string(),
            game_number: game_number.to_string(),
            players: Foursome::empty(),
            game_code: game_code.to_string(),
            is_ready: false,
        }
    }

    /// Seat a player and recompute readiness.
    ///
    /// Joining an occupied seat overwrites it. Readiness holds when the
    /// fourth slot's occupant is the player who just joined; a later join
    /// by someone else on any other seat recomputes it to false.
    pub fn seat_player(&mut self, seat: Seat, user_id: &str) {
        self.players.set(seat, user_id.to_string());
        self.is_ready = self.players.get(Seat::FOURTH).map(String::as_str) == Some(user_id);
    }
}
