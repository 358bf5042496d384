//! Bishop movement
//!
//! Bishops slide diagonally (`|d_rank| == |d_file|`) over empty squares.

use super::ray::is_path_clear;
use crate::board::Board;
use crate::types::Move;

pub fn is_legal_bishop_move(board: &Board, mv: Move) -> bool {
    let d_rank = mv.d_rank().abs();
    if d_rank == 0 || d_rank != mv.d_file().abs() {
        return false;
    }

    is_path_clear(board, mv.from(), mv.to())
}
