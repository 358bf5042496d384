//! Queen movement: a rook move or a bishop move.

use super::bishop::is_legal_bishop_move;
use super::rook::is_legal_rook_move;
use crate::board::Board;
use crate::types::Move;

pub fn is_legal_queen_move(board: &Board, mv: Move) -> bool {
    is_legal_rook_move(board, mv) || is_legal_bishop_move(board, mv)
}
