use crate::domain::window::PlayWindow;
use crate::errors::domain::{DomainError, ValidationKind};

fn hour(h: u8) -> String {
    format!("2024-06-01T{h:02}:00:00Z")
}

fn window(begin_hour: u8, end_hour: u8) -> PlayWindow {
    PlayWindow::parse_rfc3339(&hour(begin_hour), &hour(end_hour)).unwrap()
}

#[test]
fn disjoint_windows_do_not_overlap() {
    assert!(!window(9, 10).overlaps(&window(11, 12)));
    assert!(!window(11, 12).overlaps(&window(9, 10)));
}

#[test]
fn touching_endpoints_do_not_overlap() {
    let morning = window(9, 10);
    let next = window(10, 11);
    assert!(!morning.overlaps(&next));
    assert!(!next.overlaps(&morning));
}

#[test]
fn identical_windows_overlap() {
    assert!(window(9, 10).overlaps(&window(9, 10)));
}

#[test]
fn contained_window_overlaps() {
    let outer = window(9, 12);
    let inner = window(10, 11);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn partial_overlap_is_detected() {
    assert!(window(9, 11).overlaps(&window(10, 12)));
    assert!(window(10, 12).overlaps(&window(9, 11)));
}

#[test]
fn numeric_offsets_compare_on_the_timeline() {
    // 11:00+02:00 is 09:00Z, so these are the same window.
    let zulu = window(9, 10);
    let offset = PlayWindow::parse_rfc3339("2024-06-01T11:00:00+02:00", "2024-06-01T12:00:00+02:00")
        .unwrap();
    assert!(zulu.overlaps(&offset));
    assert_eq!(zulu.begin, offset.begin);
}

#[test]
fn malformed_begin_is_rejected() {
    let err = PlayWindow::parse_rfc3339("today at nine", &hour(10)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MalformedTimestamp, _)
    ));
}

#[test]
fn malformed_end_is_rejected() {
    let err = PlayWindow::parse_rfc3339(&hour(9), "2024-06-01").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MalformedTimestamp, _)
    ));
}

#[test]
fn inverted_window_is_rejected() {
    let err = PlayWindow::parse_rfc3339(&hour(10), &hour(9)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::EmptyWindow, _)
    ));
}

#[test]
fn zero_length_window_is_rejected() {
    let err = PlayWindow::parse_rfc3339(&hour(9), &hour(9)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::EmptyWindow, _)
    ));
}
