#![allow(dead_code)]

use teesheet::{GameRoster, GameService, MemoryLedger, Reservation, ReserveOutcome};

#[ctor::ctor]
fn init_logging() {
    teesheet_test_support::logging::init();
}

/// Unwrap an admitted outcome, failing loudly with the rejection details.
pub fn admitted(outcome: ReserveOutcome) -> Reservation {
    match outcome {
        ReserveOutcome::Admitted(reservation) => reservation,
        ReserveOutcome::Rejected {
            conflict_with,
            begin,
            end,
        } => panic!("expected admission, rejected against {conflict_with} ({begin} to {end})"),
    }
}

/// Seat players p1 through p4 under one game code; returns the roster as
/// the fourth join left it.
pub async fn seat_full_party(
    ledger: &MemoryLedger,
    ground_id: &str,
    game_code: &str,
) -> GameRoster {
    let service = GameService::new();
    let mut roster = None;
    for (seat, player) in [(1u8, "p1"), (2, "p2"), (3, "p3"), (4, "p4")] {
        let updated = service
            .join_game(ledger, ground_id, player, seat, game_code)
            .await
            .expect("join succeeds");
        roster = Some(updated);
    }
    roster.expect("four joins ran")
}
