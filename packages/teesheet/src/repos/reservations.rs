//! Reservation records, keyed `reservation / [groundID, userID, reservationNumber]`.
//!
//! Ground-led keys make "all bookings for a ground" one prefix scan, the
//! scan the admission check runs on every reserve call.

use crate::entities::Reservation;
use crate::errors::domain::DomainError;
use crate::ledger::{Ledger, LedgerKey};

const CATEGORY: &str = "reservation";

fn reservation_key(reservation: &Reservation) -> Result<LedgerKey, DomainError> {
    LedgerKey::new(
        CATEGORY,
        &[
            reservation.ground_id.as_str(),
            reservation.user_id.as_str(),
            reservation.reservation_number.as_str(),
        ],
    )
    .map_err(DomainError::from)
}

pub async fn save<L: Ledger + ?Sized>(
    ledger: &L,
    reservation: &Reservation,
) -> Result<(), DomainError> {
    let key = reservation_key(reservation)?;
    ledger.put(&key, super::encode(CATEGORY, reservation)?).await?;
    Ok(())
}

/// Every booking on one ground, in key order.
pub async fn find_for_ground<L: Ledger + ?Sized>(
    ledger: &L,
    ground_id: &str,
) -> Result<Vec<Reservation>, DomainError> {
    decode_all(ledger.scan_prefix(CATEGORY, &[ground_id]).await?)
}

/// One user's bookings on one ground, in key order.
pub async fn find_for_ground_and_user<L: Ledger + ?Sized>(
    ledger: &L,
    ground_id: &str,
    user_id: &str,
) -> Result<Vec<Reservation>, DomainError> {
    decode_all(ledger.scan_prefix(CATEGORY, &[ground_id, user_id]).await?)
}

/// Every booking on every ground.
pub async fn find_all<L: Ledger + ?Sized>(ledger: &L) -> Result<Vec<Reservation>, DomainError> {
    decode_all(ledger.scan_prefix(CATEGORY, &[]).await?)
}

fn decode_all(records: Vec<(String, Vec<u8>)>) -> Result<Vec<Reservation>, DomainError> {
    records
        .iter()
        .map(|(_, bytes)| super::decode(CATEGORY, bytes))
        .collect()
}
