//! Chess rules module - Piece movement geometry
//!
//! Decides whether the piece on a move's source square can physically make
//! that move on the current board. Pure functions, no side effects.
//!
//! Turn order, same-color destinations and self-check are left to
//! [`crate::api::validate_move`].
//!
//! # Module Structure
//!
//! - `ray` - Bounded directional scan shared with check detection
//! - `pawn`, `knight`, `bishop`, `rook`, `queen`, `king` - One rule each

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod ray;
pub mod rook;


pub use ray::{is_path_clear, scan_direction};

use crate::state::GameState;
use crate::types::{Move, PieceKind};

/// Check if the piece on `mv.from()` may move to `mv.to()`
///
/// Returns `false` when the source square is empty.
pub fn is_legal(state: &GameState, mv: Move) -> bool {
    let board = state.board();
    let Some(piece) = board.get(mv.from()) else {
        return false;
    };

    match piece.kind {
        PieceKind::Pawn => pawn::is_legal_pawn_move(board, mv, piece, state.rules()),
        PieceKind::Rook => rook::is_legal_rook_move(board, mv),
        PieceKind::Knight => knight::is_legal_knight_move(mv),
        PieceKind::Bishop => bishop::is_legal_bishop_move(board, mv),
        PieceKind::Queen => queen::is_legal_queen_move(board, mv),
        PieceKind::King => king::is_legal_king_move(mv),
    }
}
