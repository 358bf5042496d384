//! Rook movement
//!
//! Rooks slide any distance along a rank or a file. Every square strictly
//! between source and destination must be empty.

use super::ray::is_path_clear;
use crate::board::Board;
use crate::types::Move;

pub fn is_legal_rook_move(board: &Board, mv: Move) -> bool {
    // Exactly one of the two deltas may be non-zero
    if (mv.d_rank() == 0) == (mv.d_file() == 0) {
        return false;
    }

    is_path_clear(board, mv.from(), mv.to())
}
