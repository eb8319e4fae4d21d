//! Pure booking and consensus logic: no ledger, no IO.

pub mod consensus;
pub mod rules;
pub mod seats;
pub mod window;

#[cfg(test)]
mod tests_consensus;
#[cfg(test)]
mod tests_props_window;
#[cfg(test)]
mod tests_seats;
#[cfg(test)]
mod tests_window;

pub use seats::{Foursome, Seat};
pub use window::PlayWindow;
