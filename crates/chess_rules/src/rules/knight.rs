//! Knight movement
//!
//! Knights jump in an L-shape, two squares one way and one the other, and
//! ignore anything in between.

use crate::types::Move;

pub fn is_legal_knight_move(mv: Move) -> bool {
    let d_rank = mv.d_rank().abs();
    let d_file = mv.d_file().abs();
    (d_rank == 1 && d_file == 2) || (d_rank == 2 && d_file == 1)
}
