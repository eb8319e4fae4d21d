//! Grounds available for booking.

use serde::{Deserialize, Serialize};

/// A bookable ground and its published envelope.
///
/// `available_time_start`/`available_time_end` are opening hours on a 24h
/// clock, informational to callers; admission checks windows only against
/// other reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ground {
    #[serde(rename = "groundID")]
    pub ground_id: String,
    pub ground_name: String,
    pub available_time_start: u8,
    pub available_time_end: u8,
    pub total_hole: u32,
}
