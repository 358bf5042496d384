//! King movement
//!
//! One square in any direction. Castling is not supported.

use crate::types::Move;

pub fn is_legal_king_move(mv: Move) -> bool {
    let d_rank = mv.d_rank().abs();
    let d_file = mv.d_file().abs();
    d_rank <= 1 && d_file <= 1 && !mv.is_null()
}
