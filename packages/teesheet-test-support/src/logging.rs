//! Logging initialization shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Level filter for test runs: `TEST_LOG` wins, then `RUST_LOG`, then a
/// quiet `"warn"` default.
fn test_filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the test subscriber.
///
/// Safe to call from every test and every `ctor` hook: the `OnceCell` guard
/// makes repeat calls no-ops, and `try_init().ok()` tolerates a subscriber
/// some other harness installed first. Output goes through
/// `with_test_writer()` so cargo and nextest capture it per test, with
/// timestamps suppressed to keep failure diffs stable.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
