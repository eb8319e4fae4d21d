//! Seats and per-seat storage.
//!
//! A [`Seat`] is one of the four fixed player slots, validated at the edge so
//! everything past the service boundary can index without bounds checks. A
//! [`Foursome`] maps each seat to an optional value and is the wire shape for
//! rosters, scorecard lines, and agreement marks (a four-element JSON array,
//! unoccupied seats `null`).

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::errors::domain::{DomainError, ValidationKind};

/// One of the four player slots, numbered 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seat(u8);

impl Seat {
    /// All seats in slot order.
    pub const ALL: [Seat; PLAYERS] = [Seat(1), Seat(2), Seat(3), Seat(4)];

    /// The fourth slot, whose occupant drives roster readiness.
    pub const FOURTH: Seat = Seat(4);

    /// Validate a caller-supplied seat number.
    pub fn new(number: u8) -> Result<Self, DomainError> {
        if (1..=PLAYERS as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(DomainError::validation(
                ValidationKind::InvalidSeat,
                format!("seat {number} is outside the fixed 1..=4 range"),
            ))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Seat-indexed storage for the fixed four slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Foursome<T>([Option<T>; PLAYERS]);

impl<T> Foursome<T> {
    /// All four slots unoccupied.
    pub fn empty() -> Self {
        Self([None, None, None, None])
    }

    pub fn get(&self, seat: Seat) -> Option<&T> {
        self.0[seat.index()].as_ref()
    }

    /// Occupy a slot, returning whatever it previously held.
    pub fn set(&mut self, seat: Seat, value: T) -> Option<T> {
        self.0[seat.index()].replace(value)
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Slots in seat order, occupied or not.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, Option<&T>)> + '_ {
        Seat::ALL.into_iter().zip(self.0.iter().map(Option::as_ref))
    }
}

impl<T> Default for Foursome<T> {
    fn default() -> Self {
        Self::empty()
    }
}
