use serde_json::json;

use crate::domain::seats::{Foursome, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn accepts_the_four_valid_seat_numbers() {
    for number in 1..=4u8 {
        let seat = Seat::new(number).unwrap();
        assert_eq!(seat.number(), number);
    }
}

#[test]
fn rejects_out_of_range_seat_numbers() {
    for number in [0u8, 5, 42, 255] {
        let err = Seat::new(number).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidSeat, _)
        ));
    }
}

#[test]
fn set_returns_the_displaced_occupant() {
    let mut roster: Foursome<String> = Foursome::empty();
    let seat = Seat::new(2).unwrap();
    assert_eq!(roster.set(seat, "alice".into()), None);
    assert_eq!(roster.set(seat, "bob".into()), Some("alice".into()));
    assert_eq!(roster.get(seat), Some(&"bob".to_string()));
}

#[test]
fn is_full_requires_all_four_slots() {
    let mut roster: Foursome<u32> = Foursome::empty();
    for (i, seat) in Seat::ALL.into_iter().enumerate() {
        assert!(!roster.is_full());
        roster.set(seat, i as u32);
    }
    assert!(roster.is_full());
}

#[test]
fn iter_walks_slots_in_seat_order() {
    let mut roster: Foursome<&str> = Foursome::empty();
    roster.set(Seat::new(3).unwrap(), "carol");
    let slots: Vec<(u8, Option<&&str>)> = roster
        .iter()
        .map(|(seat, value)| (seat.number(), value))
        .collect();
    assert_eq!(
        slots,
        vec![(1, None), (2, None), (3, Some(&"carol")), (4, None)]
    );
}

#[test]
fn wire_shape_is_a_four_element_array() {
    let mut marks: Foursome<String> = Foursome::empty();
    marks.set(Seat::new(2).unwrap(), "agree".into());
    let encoded = serde_json::to_value(&marks).unwrap();
    assert_eq!(encoded, json!([null, "agree", null, null]));

    let decoded: Foursome<String> = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, marks);
}
