//! The ledger seam.
//!
//! Every contract operation runs against a [`Ledger`]: the keyed byte store
//! and event sink the host provides. Hosts must serialize invocations that
//! touch the same keys (the contract layers no locks of its own on top), and
//! they deliver at most one emitted event per invocation to subscribers.

pub mod key;
pub mod memory;

pub use key::LedgerKey;
pub use memory::{EmittedEvent, MemoryLedger};

use async_trait::async_trait;
use thiserror::Error;

/// Failure surfaced by a ledger backend.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The backend could not complete a store operation.
    #[error("ledger {op} failed for `{key}`: {source}")]
    Backend {
        op: &'static str,
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A key component was empty or contained the delimiter.
    #[error("invalid ledger key: {0}")]
    InvalidKey(String),
}

impl LedgerError {
    pub fn backend(
        op: &'static str,
        key: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Backend {
            op,
            key: key.into(),
            source: Box::new(source),
        }
    }
}

/// World-state contract implemented by the host.
///
/// `scan_prefix` returns records ordered by their encoded key, which is
/// byte-wise lexicographic over the key components. Numeric segments are
/// therefore ordered as text (`"10"` sorts before `"2"`); callers needing
/// numeric order sort for themselves.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Bytes stored under `key`, or `None` when the key was never written.
    async fn get(&self, key: &LedgerKey) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Store `bytes` under `key`, replacing any prior value.
    async fn put(&self, key: &LedgerKey, bytes: Vec<u8>) -> Result<(), LedgerError>;

    /// All records in `category` whose leading segments equal `segments`
    /// (empty for the whole category), as `(encoded key, bytes)` pairs in
    /// encoded-key order.
    async fn scan_prefix(
        &self,
        category: &str,
        segments: &[&str],
    ) -> Result<Vec<(String, Vec<u8>)>, LedgerError>;

    /// Publish a named event alongside this invocation's writes.
    async fn emit_event(&self, name: &str, payload: Vec<u8>) -> Result<(), LedgerError>;
}
