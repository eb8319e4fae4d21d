//! In-memory [`Ledger`] for embedding and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::key::{self, LedgerKey};
use super::{Ledger, LedgerError};

/// One event published through [`Ledger::emit_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedEvent {
    pub name: String,
    pub payload: Vec<u8>,
}

/// BTreeMap-backed ledger. Scans come back in encoded-key order for free,
/// and emitted events are retained for inspection.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    records: Mutex<BTreeMap<String, Vec<u8>>>,
    events: Mutex<Vec<EmittedEvent>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event emitted so far, oldest first.
    pub fn events(&self) -> Vec<EmittedEvent> {
        self.events.lock().clone()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[async_trait]
impl Ledger for MemoryLedger {
    async fn get(&self, key: &LedgerKey) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.records.lock().get(&key.encode()).cloned())
    }

    async fn put(&self, key: &LedgerKey, bytes: Vec<u8>) -> Result<(), LedgerError> {
        self.records.lock().insert(key.encode(), bytes);
        Ok(())
    }

    async fn scan_prefix(
        &self,
        category: &str,
        segments: &[&str],
    ) -> Result<Vec<(String, Vec<u8>)>, LedgerError> {
        let prefix = key::encode_prefix(category, segments)?;
        let records = self.records.lock();
        Ok(records
            .range(prefix.clone()..)
            .take_while(|(stored, _)| stored.starts_with(&prefix))
            .map(|(stored, bytes)| (stored.clone(), bytes.clone()))
            .collect())
    }

    async fn emit_event(&self, name: &str, payload: Vec<u8>) -> Result<(), LedgerError> {
        self.events.lock().push(EmittedEvent {
            name: name.to_string(),
            payload,
        });
        Ok(())
    }
}
