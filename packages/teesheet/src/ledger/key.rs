//! Composite keys for ledger records.
//!
//! A key is a category plus one or more segments, encoded by joining every
//! component with a NUL delimiter and closing with a trailing NUL. Because
//! NUL can appear in no component, encoded keys sort byte-wise exactly like
//! the component sequences they were built from, and a shorter key is never
//! a false prefix of a longer sibling (`G1` does not prefix-match `G10`).

use std::fmt::{Display, Formatter, Result as FmtResult};

use super::LedgerError;

const DELIMITER: char = '\u{0}';

/// Fully-formed key of one ledger record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedgerKey {
    category: String,
    segments: Vec<String>,
}

impl LedgerKey {
    /// Build a record key; requires a category and at least one segment,
    /// all non-empty and NUL-free.
    pub fn new(category: &str, segments: &[&str]) -> Result<Self, LedgerError> {
        validate_component("category", category)?;
        if segments.is_empty() {
            return Err(LedgerError::InvalidKey(format!(
                "key in category `{category}` has no segments"
            )));
        }
        for segment in segments {
            validate_component("segment", segment)?;
        }
        Ok(Self {
            category: category.to_string(),
            segments: segments.iter().map(|s| (*s).to_string()).collect(),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Delimited store-level form of the key.
    pub fn encode(&self) -> String {
        let mut encoded = String::with_capacity(
            self.category.len() + self.segments.iter().map(|s| s.len() + 1).sum::<usize>() + 1,
        );
        encoded.push_str(&self.category);
        encoded.push(DELIMITER);
        for segment in &self.segments {
            encoded.push_str(segment);
            encoded.push(DELIMITER);
        }
        encoded
    }
}

impl Display for LedgerKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.category, self.segments.join("/"))
    }
}

/// Encode the scan prefix covering every key in `category` whose leading
/// segments equal `segments` (empty for a whole-category scan).
pub fn encode_prefix(category: &str, segments: &[&str]) -> Result<String, LedgerError> {
    validate_component("category", category)?;
    let mut encoded = String::new();
    encoded.push_str(category);
    encoded.push(DELIMITER);
    for segment in segments {
        validate_component("segment", segment)?;
        encoded.push_str(segment);
        encoded.push(DELIMITER);
    }
    Ok(encoded)
}

fn validate_component(what: &str, value: &str) -> Result<(), LedgerError> {
    if value.is_empty() {
        return Err(LedgerError::InvalidKey(format!("empty key {what}")));
    }
    if value.contains(DELIMITER) {
        return Err(LedgerError::InvalidKey(format!(
            "key {what} `{}` contains a NUL byte",
            value.escape_default()
        )));
    }
    Ok(())
}
