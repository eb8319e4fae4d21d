#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Tee-sheet booking and scorecard consensus over a pluggable ledger.
//!
//! The crate is a contract library: a host hands each operation a
//! [`Ledger`] (keyed byte store plus event sink) and the operation runs to
//! completion against it, one invocation at a time. The host must serialize
//! invocations that touch the same keys; nothing here takes locks or
//! retries, so interleaved writers on one counter or roster key are
//! undefined behavior of the deployment, not of this crate.
//!
//! Two state machines live on the ledger: reservation admission (windows
//! admitted only when they clash with no existing booking on the ground)
//! and per-hole score consensus (scores promoted from tentative to
//! validated when all four seats record the agreement literal).

pub mod domain;
pub mod entities;
pub mod errors;
pub mod ledger;
pub mod repos;
pub mod services;
pub mod utils;

pub use domain::{Foursome, PlayWindow, Seat};
pub use entities::{Agreement, Counter, CounterRecord, GameRoster, Ground, HoleScore, Reservation};
pub use errors::DomainError;
pub use ledger::{Ledger, LedgerError, LedgerKey, MemoryLedger};
pub use services::{GameService, GroundService, ReservationService, ReserveOutcome, ScoringService};

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    teesheet_test_support::logging::init();
}
