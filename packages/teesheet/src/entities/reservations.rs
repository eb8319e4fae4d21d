//! Admitted bookings.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::PlayWindow;

/// One admitted booking of a ground. Only admitted reservations are ever
/// persisted; a rejected request leaves no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(rename = "groundID")]
    pub ground_id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub begin: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end: OffsetDateTime,
    /// Minted sequence number, e.g. `RESERVE17`.
    pub reservation_number: String,
    /// Display code shown to the party; never a lookup key.
    pub game_code: u16,
}

impl Reservation {
    /// The interval this booking occupies.
    pub fn window(&self) -> PlayWindow {
        PlayWindow::new(self.begin, self.end)
    }
}
