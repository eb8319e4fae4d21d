//! Booking windows.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::errors::domain::{DomainError, ValidationKind};

/// Half-open interval `[begin, end)` a reservation occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayWindow {
    pub begin: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl PlayWindow {
    pub fn new(begin: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self { begin, end }
    }

    /// Parse a begin/end pair of RFC 3339 instants.
    ///
    /// Fails on the first malformed instant and on windows that end at or
    /// before their own begin; a window that admits nothing can never be
    /// booked.
    pub fn parse_rfc3339(begin: &str, end: &str) -> Result<Self, DomainError> {
        let begin = parse_instant(begin)?;
        let end = parse_instant(end)?;
        if end <= begin {
            return Err(DomainError::validation(
                ValidationKind::EmptyWindow,
                format!("window must end after it begins (begin {begin}, end {end})"),
            ));
        }
        Ok(Self { begin, end })
    }

    /// Whether two windows share any instant. Touching endpoints do not
    /// conflict: a booking ending at 10:00 coexists with one beginning
    /// at 10:00.
    pub fn overlaps(&self, other: &PlayWindow) -> bool {
        self.begin < other.end && other.begin < self.end
    }
}

fn parse_instant(raw: &str) -> Result<OffsetDateTime, DomainError> {
    OffsetDateTime::parse(raw, &Rfc3339).map_err(|err| {
        DomainError::validation(
            ValidationKind::MalformedTimestamp,
            format!("`{raw}` is not an RFC 3339 instant: {err}"),
        )
    })
}
