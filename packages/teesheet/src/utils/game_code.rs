//! Display game codes for admitted reservations.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use time::OffsetDateTime;

use crate::domain::rules::GAME_CODE_SPAN;

/// Draw a code in `0..GAME_CODE_SPAN`.
///
/// The generator is seeded from the wall clock's nanosecond count at call
/// time. Codes are display-only: they are shown to the booking party and
/// later compared when players join a game, but they are never a ledger
/// key, so collisions between reservations are tolerable.
pub fn draw() -> u16 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    let mut rng = ChaCha8Rng::seed_from_u64(nanos as u64);
    rng.random_range(0..GAME_CODE_SPAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_stay_in_span() {
        for _ in 0..512 {
            assert!(draw() < GAME_CODE_SPAN);
        }
    }
}
