//! Durable numbering sequences.

use tracing::debug;

use crate::entities::counters::{Counter, CounterRecord};
use crate::errors::domain::DomainError;
use crate::ledger::{Ledger, LedgerKey};

const CATEGORY: &str = "counter";

fn sequence_key(counter: Counter) -> Result<LedgerKey, DomainError> {
    LedgerKey::new(CATEGORY, &[counter.segment()]).map_err(DomainError::from)
}

/// Peek at a sequence without advancing it. `None` means the sequence has
/// never minted a number.
pub async fn current<L: Ledger + ?Sized>(
    ledger: &L,
    counter: Counter,
) -> Result<Option<CounterRecord>, DomainError> {
    let key = sequence_key(counter)?;
    match ledger.get(&key).await? {
        None => Ok(None),
        Some(bytes) => super::decode(CATEGORY, &bytes).map(Some),
    }
}

/// Mint the next number in a sequence and persist the advanced record
/// before returning it.
///
/// The first mint yields index 1. Monotonicity relies on the host
/// serializing invocations touching the same counter key; see the crate
/// docs.
pub async fn next_in_sequence<L: Ledger + ?Sized>(
    ledger: &L,
    counter: Counter,
) -> Result<CounterRecord, DomainError> {
    let key = sequence_key(counter)?;
    let advanced = match ledger.get(&key).await? {
        None => CounterRecord {
            label: counter.label().to_string(),
            index: 1,
        },
        Some(bytes) => {
            let prior: CounterRecord = super::decode(CATEGORY, &bytes)?;
            CounterRecord {
                index: prior.index + 1,
                ..prior
            }
        }
    };
    ledger.put(&key, super::encode(CATEGORY, &advanced)?).await?;
    debug!(label = advanced.label.as_str(), index = advanced.index, "sequence advanced");
    Ok(advanced)
}
