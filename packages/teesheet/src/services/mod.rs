//! Contract operations, grouped by concern.
//!
//! Services are stateless unit structs: every operation borrows the ledger
//! it runs against, performs its reads and writes strictly in sequence, and
//! finishes before returning. Concurrency control is the host's job.

pub mod games;
pub mod grounds;
pub mod reservations;
pub mod scoring;

pub use games::GameService;
pub use grounds::GroundService;
pub use reservations::{ReservationService, ReserveOutcome};
pub use scoring::ScoringService;
