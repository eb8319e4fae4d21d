//! Generators for unique test identifiers.
//!
//! ULID-suffixed values keep parallel tests from colliding on ledger keys
//! even when they share a ledger instance.

use ulid::Ulid;

/// Unique string in the form `{prefix}-{ulid}`.
///
/// # Examples
/// ```
/// use teesheet_test_support::unique::unique_str;
///
/// let a = unique_str("ground");
/// let b = unique_str("ground");
/// assert_ne!(a, b);
/// assert!(a.starts_with("ground-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}
