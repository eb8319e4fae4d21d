use std::cmp::{max, min};

use proptest::prelude::*;
use time::{Duration, OffsetDateTime};

use crate::domain::window::PlayWindow;

/// Windows on a minute grid over a few days, with non-degenerate lengths.
fn any_window() -> impl Strategy<Value = PlayWindow> {
    (0i64..4320, 1i64..360).prop_map(|(start_min, len_min)| {
        let begin = OffsetDateTime::UNIX_EPOCH + Duration::minutes(start_min);
        PlayWindow::new(begin, begin + Duration::minutes(len_min))
    })
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in any_window(), b in any_window()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn overlap_agrees_with_interval_intersection(a in any_window(), b in any_window()) {
        let intersects = max(a.begin, b.begin) < min(a.end, b.end);
        prop_assert_eq!(a.overlaps(&b), intersects);
    }

    #[test]
    fn every_window_overlaps_itself(a in any_window()) {
        prop_assert!(a.overlaps(&a));
    }

    #[test]
    fn abutting_window_never_overlaps(a in any_window(), len_min in 1i64..360) {
        let after = PlayWindow::new(a.end, a.end + Duration::minutes(len_min));
        prop_assert!(!a.overlaps(&after));
        prop_assert!(!after.overlaps(&a));
    }
}
