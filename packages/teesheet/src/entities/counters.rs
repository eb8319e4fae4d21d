//! Durable numbering sequences.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{GAME_LABEL, RESERVE_LABEL};

/// The two sequences the contract numbers records from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    /// Reservation numbers (`RESERVE1`, `RESERVE2`, ...).
    Reservations,
    /// Game numbers (`GAME1`, `GAME2`, ...).
    Games,
}

impl Counter {
    /// Label prefixed to the index in the human-facing number.
    pub fn label(self) -> &'static str {
        match self {
            Self::Reservations => RESERVE_LABEL,
            Self::Games => GAME_LABEL,
        }
    }

    /// Key segment the sequence is stored under.
    pub(crate) fn segment(self) -> &'static str {
        match self {
            Self::Reservations => "reservation",
            Self::Games => "game",
        }
    }
}

/// Durable state of one sequence; `index` is the most recently minted
/// number, never a "next" preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterRecord {
    pub label: String,
    pub index: u64,
}

impl CounterRecord {
    /// The number in wire form, e.g. `RESERVE17` or `GAME3`.
    pub fn number(&self) -> String {
        format!("{}{}", self.label, self.index)
    }
}
