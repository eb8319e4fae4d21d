//! Shared helpers for teesheet tests.
//!
//! Provides quiet, idempotent logging setup plus generators for unique
//! identifiers and fixed-date RFC 3339 timestamps, so unit and integration
//! tests stay isolated and readable.

pub mod logging;
pub mod times;
pub mod unique;
