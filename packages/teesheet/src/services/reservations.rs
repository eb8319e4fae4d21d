//! Reservation admission and queries.
//!
//! Admission is the heart of the booking contract: a window is admitted
//! only when it overlaps no booking already on the ground, with touching
//! endpoints allowed. The conflict scan runs before any number is minted,
//! so a rejected request leaves the ledger exactly as it found it.

use time::OffsetDateTime;
use tracing::info;

use crate::domain::PlayWindow;
use crate::entities::counters::Counter;
use crate::entities::Reservation;
use crate::errors::domain::DomainError;
use crate::ledger::Ledger;
use crate::repos::{self, counters, reservations};
use crate::utils::game_code;

/// Event published for every admitted reservation; the payload is the
/// reservation record itself.
pub const NEW_RESERVATION_EVENT: &str = "newReservation";

/// Verdict of one reservation request. Rejection is an outcome, not an
/// error: the request was well-formed, the window just was not free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// The window was free; the reservation is on the ledger and the
    /// `newReservation` event has been published.
    Admitted(Reservation),
    /// The window clashes with an existing booking; nothing was written,
    /// no number minted, no event published.
    Rejected {
        /// Number of the first clashing booking found, in scan order.
        conflict_with: String,
        /// The clashing booking's window.
        begin: OffsetDateTime,
        end: OffsetDateTime,
    },
}

pub struct ReservationService;

impl ReservationService {
    pub fn new() -> Self {
        Self
    }

    /// Try to book `[begin, end)` on a ground for a user.
    ///
    /// Flow: parse the window (fail fast on malformed instants), scan the
    /// ground's existing bookings for an overlap, and only on a free window
    /// mint the next reservation number, publish the event, and persist.
    pub async fn reserve<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        ground_id: &str,
        user_id: &str,
        begin: &str,
        end: &str,
    ) -> Result<ReserveOutcome, DomainError> {
        let window = PlayWindow::parse_rfc3339(begin, end)?;
        let code = game_code::draw();

        let booked = reservations::find_for_ground(ledger, ground_id).await?;
        if let Some(clash) = booked.iter().find(|r| window.overlaps(&r.window())) {
            info!(
                ground_id,
                user_id,
                conflict_with = clash.reservation_number.as_str(),
                "reservation rejected, window already booked"
            );
            return Ok(ReserveOutcome::Rejected {
                conflict_with: clash.reservation_number.clone(),
                begin: clash.begin,
                end: clash.end,
            });
        }

        let minted = counters::next_in_sequence(ledger, Counter::Reservations).await?;
        let reservation = Reservation {
            ground_id: ground_id.to_string(),
            user_id: user_id.to_string(),
            begin: window.begin,
            end: window.end,
            reservation_number: minted.number(),
            game_code: code,
        };

        let payload = repos::encode("reservation", &reservation)?;
        ledger.emit_event(NEW_RESERVATION_EVENT, payload).await?;
        reservations::save(ledger, &reservation).await?;
        info!(
            ground_id,
            user_id,
            reservation_number = reservation.reservation_number.as_str(),
            "reservation admitted"
        );
        Ok(ReserveOutcome::Admitted(reservation))
    }

    /// A user's bookings on one ground, for confirmation after booking.
    pub async fn confirm_reservation<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        ground_id: &str,
        user_id: &str,
    ) -> Result<Vec<Reservation>, DomainError> {
        reservations::find_for_ground_and_user(ledger, ground_id, user_id).await
    }

    /// A user's bookings across all grounds.
    pub async fn reservations_for_requester<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        user_id: &str,
    ) -> Result<Vec<Reservation>, DomainError> {
        let mut all = reservations::find_all(ledger).await?;
        all.retain(|r| r.user_id == user_id);
        Ok(all)
    }
}

impl Default for ReservationService {
    fn default() -> Self {
        Self::new()
    }
}
