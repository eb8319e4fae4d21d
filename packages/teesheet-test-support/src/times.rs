//! Fixed-date RFC 3339 timestamps for booking tests.

use time::format_description::well_known::Rfc3339;
use time::macros::datetime;
use time::Duration;

/// RFC 3339 instant at the given hour offset from a fixed reference day.
///
/// Hour 0 is `2024-06-01T00:00:00Z`; offsets past 24 roll into the
/// following days, so multi-day schedules read as plain integers.
///
/// # Examples
/// ```
/// use teesheet_test_support::times::hour;
///
/// assert_eq!(hour(9), "2024-06-01T09:00:00Z");
/// assert_eq!(hour(25), "2024-06-02T01:00:00Z");
/// ```
pub fn hour(offset: i64) -> String {
    let instant = datetime!(2024-06-01 00:00 UTC) + Duration::hours(offset);
    instant
        .format(&Rfc3339)
        .expect("fixed UTC instants always format")
}

/// Begin/end pair for a booking window spanning the given hours.
pub fn window(begin: i64, end: i64) -> (String, String) {
    (hour(begin), hour(end))
}
