//! Record types persisted on the ledger.
//!
//! Field names on the wire are the contract: hosts and subscribers parse
//! these JSON shapes, so renames here are breaking changes.

pub mod counters;
pub mod games;
pub mod grounds;
pub mod reservations;
pub mod scores;

pub use counters::{Counter, CounterRecord};
pub use games::GameRoster;
pub use grounds::Ground;
pub use reservations::Reservation;
pub use scores::{Agreement, HoleScore};
