use crate::domain::consensus::unanimous;
use crate::domain::seats::{Foursome, Seat};

fn marks(values: [Option<&str>; 4]) -> Foursome<String> {
    let mut marks = Foursome::empty();
    for (seat, value) in Seat::ALL.into_iter().zip(values) {
        if let Some(value) = value {
            marks.set(seat, value.to_string());
        }
    }
    marks
}

#[test]
fn empty_marks_are_not_unanimous() {
    assert!(!unanimous(&Foursome::empty()));
}

#[test]
fn three_agreements_are_not_unanimous() {
    let marks = marks([Some("agree"), Some("agree"), Some("agree"), None]);
    assert!(!unanimous(&marks));
}

#[test]
fn four_agreements_are_unanimous() {
    let marks = marks([Some("agree"); 4]);
    assert!(unanimous(&marks));
}

#[test]
fn any_dissent_withholds_unanimity() {
    let marks = marks([Some("agree"), Some("disagree"), Some("agree"), Some("agree")]);
    assert!(!unanimous(&marks));
}

#[test]
fn the_mark_is_compared_exactly() {
    for near_miss in ["Agree", "AGREE", " agree", "agree ", "agreed"] {
        let marks = marks([Some("agree"), Some("agree"), Some("agree"), Some(near_miss)]);
        assert!(!unanimous(&marks), "`{near_miss}` must not count as agreement");
    }
}
