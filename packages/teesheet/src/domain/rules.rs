//! Fixed rules and wire literals of the booking and scoring contract.

/// Every game seats exactly four players; scoring quorum is all four.
pub const PLAYERS: usize = 4;

/// The literal a seat must record for a hole score to validate.
/// Compared exactly; any other string is a non-agreement.
pub const AGREE_MARK: &str = "agree";

/// Label of the reservation sequence, forming numbers like `RESERVE17`.
pub const RESERVE_LABEL: &str = "RESERVE";

/// Label of the game sequence, forming numbers like `GAME3`.
pub const GAME_LABEL: &str = "GAME";

/// Exclusive upper bound for drawn reservation game codes.
pub const GAME_CODE_SPAN: u16 = 9999;
