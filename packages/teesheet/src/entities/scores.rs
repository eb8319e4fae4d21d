//! Per-hole scorecard lines and agreement marks.

use serde::{Deserialize, Serialize};

use crate::domain::Foursome;

/// One hole's scores for the four seats.
///
/// Lives as tentative (`validated: false`) until every seat agrees; once
/// validated it never reverts, regardless of later mark changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleScore {
    pub hole_number: String,
    /// Seat-indexed scores, free-form strings as submitted.
    pub scores: Foursome<String>,
    pub validated: bool,
}

impl HoleScore {
    pub fn fresh(hole_number: &str) -> Self {
        Self {
            hole_number: hole_number.to_string(),
            scores: Foursome::empty(),
            validated: false,
        }
    }
}

/// One hole's agreement marks for the four seats. Marks feed validation;
/// the record itself carries no validated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    pub hole_number: String,
    pub marks: Foursome<String>,
}

impl Agreement {
    pub fn fresh(hole_number: &str) -> Self {
        Self {
            hole_number: hole_number.to_string(),
            marks: Foursome::empty(),
        }
    }
}
