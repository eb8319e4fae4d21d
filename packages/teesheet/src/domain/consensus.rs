//! Unanimity over per-hole agreement marks.

use crate::domain::rules::AGREE_MARK;
use crate::domain::seats::{Foursome, Seat};

/// True once every seat has recorded exactly [`AGREE_MARK`].
///
/// An unoccupied slot, or any other string in a slot, withholds unanimity.
pub fn unanimous(marks: &Foursome<String>) -> bool {
    Seat::ALL
        .into_iter()
        .all(|seat| marks.get(seat).is_some_and(|mark| mark == AGREE_MARK))
}
