//! Full-board attack recomputation.
//!
//! The attack mask is always rebuilt from the complete piece list, never
//! patched incrementally; a stale mark here would silently shrink the set of
//! candidate squares.

use crate::board::board_types::{square_bit, Square};
use crate::moves::centaur_attacks::centaur_attacks;

/// Pure function of the piece list: the union of every centaur's row, column,
/// and knight targets. An occupied square is never marked attacked.
pub fn compute_attacked(pieces: &[Square]) -> u64 {
    let mut occupied = 0u64;
    let mut attacked = 0u64;

    for &square in pieces {
        occupied |= square_bit(square);
        attacked |= centaur_attacks(square);
    }

    attacked & !occupied
}
