//! Pawn movement
//!
//! ## Rules
//!
//! - Pawns only move towards the opponent's back rank: White towards rank
//!   index 0, Black towards rank index 7. No sideways or backward moves.
//! - One square straight ahead onto an empty square.
//! - Two squares straight ahead from an unmoved pawn onto an empty square.
//!   With [`RulesConfig::double_step_requires_clear_path`] the skipped
//!   square must be empty as well.
//! - One square diagonally ahead, only to capture an opposing piece.
//! - En passant is not supported.

use crate::board::Board;
use crate::config::RulesConfig;
use crate::types::{Move, Piece};

pub fn is_legal_pawn_move(board: &Board, mv: Move, pawn: Piece, rules: RulesConfig) -> bool {
    let forward = pawn.color.forward();
    let d_rank = mv.d_rank();
    let d_file = mv.d_file();

    if d_file.abs() > 1 || d_rank.abs() > 2 {
        return false;
    }
    // Covers backward, sideways and the null move
    if d_rank * forward <= 0 {
        return false;
    }

    if d_file == 0 {
        if d_rank == forward {
            return board.is_empty(mv.to());
        }

        // Double step
        if pawn.has_moved || !board.is_empty(mv.to()) {
            return false;
        }
        if rules.double_step_requires_clear_path {
            return mv
                .from()
                .offset(forward, 0)
                .is_some_and(|skipped| board.is_empty(skipped));
        }
        return true;
    }

    // Diagonal: exactly one rank ahead and an opposing piece to take
    d_rank == forward
        && board
            .color_at(mv.to())
            .is_some_and(|color| color != pawn.color)
}
