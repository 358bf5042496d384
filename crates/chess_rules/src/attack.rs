//! Check detection
//!
//! Answers "would this move leave my own king attacked?" by trying the move
//! on a clone of the [`GameState`] and probing outward from the king on the
//! clone. The real state is only ever borrowed immutably.
//!
//! ## Probes
//!
//! From the king square, in order, stopping at the first attacker:
//! 1. the two squares diagonally ahead of the king, for an opposing pawn
//! 2. the four orthogonal rays, for an opposing rook or queen
//! 3. the four diagonal rays, for an opposing bishop or queen
//! 4. the eight knight jumps, for an opposing knight
//! 5. the eight neighbouring squares, for the opposing king
//!
//! The last probe keeps the kings apart, so no accepted move can leave a
//! king where the other one could take it.

use tracing::trace;

use crate::board::Board;
use crate::constants::{DIAGONAL_DIRECTIONS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS};
use crate::rules::ray::scan_direction;
use crate::state::GameState;
use crate::types::{Color, Move, PieceKind, Square};

/// Check if applying `mv` would leave the mover's king attacked
///
/// The mover is the color of the piece on `mv.from()`, or the side to move
/// when that square is empty. Promotion is irrelevant here since a friendly
/// piece shields the king the same way whatever its kind.
pub fn is_check_after(state: &GameState, mv: Move) -> bool {
    let mover = state
        .board()
        .color_at(mv.from())
        .unwrap_or_else(|| state.side_to_move());

    let mut scratch = state.clone();
    scratch.commit(mv, None);

    let king = scratch.king_square(mover);
    let attacked = is_king_attacked(scratch.board(), king, mover);
    if attacked {
        trace!("[CHECK] {} would leave the {} king on {} attacked", mv, mover, king);
    }
    attacked
}

/// Check if `color`'s king is attacked in the current position
pub fn is_in_check(state: &GameState, color: Color) -> bool {
    is_king_attacked(state.board(), state.king_square(color), color)
}

/// Run the five probes around `king`, a king of color `color`
pub fn is_king_attacked(board: &Board, king: Square, color: Color) -> bool {
    let enemy = !color;

    attacked_by_pawn(board, king, color, enemy)
        || attacked_along_rays(board, king, &ORTHOGONAL_DIRECTIONS, PieceKind::Rook, enemy)
        || attacked_along_rays(board, king, &DIAGONAL_DIRECTIONS, PieceKind::Bishop, enemy)
        || attacked_by_knight(board, king, enemy)
        || attacked_by_king(board, king, enemy)
}

/// Opposing pawns capture towards the king from one rank "ahead" of it.
fn attacked_by_pawn(board: &Board, king: Square, color: Color, enemy: Color) -> bool {
    [-1, 1].into_iter().any(|d_file| {
        king.offset(color.forward(), d_file)
            .and_then(|square| board.get(square))
            .is_some_and(|piece| piece.is(PieceKind::Pawn, enemy))
    })
}

/// Rays are hit by `slider` or by a queen.
fn attacked_along_rays(
    board: &Board,
    king: Square,
    directions: &[(i8, i8)],
    slider: PieceKind,
    enemy: Color,
) -> bool {
    directions.iter().any(|&(d_rank, d_file)| {
        scan_direction(board, king, d_rank, d_file).is_some_and(|(_, piece)| {
            piece.color == enemy && (piece.kind == slider || piece.kind == PieceKind::Queen)
        })
    })
}

fn attacked_by_knight(board: &Board, king: Square, enemy: Color) -> bool {
    KNIGHT_OFFSETS.iter().any(|&(d_rank, d_file)| {
        king.offset(d_rank, d_file)
            .and_then(|square| board.get(square))
            .is_some_and(|piece| piece.is(PieceKind::Knight, enemy))
    })
}

fn attacked_by_king(board: &Board, king: Square, enemy: Color) -> bool {
    ORTHOGONAL_DIRECTIONS
        .iter()
        .chain(DIAGONAL_DIRECTIONS.iter())
        .any(|&(d_rank, d_file)| {
            king.offset(d_rank, d_file)
                .and_then(|square| board.get(square))
                .is_some_and(|piece| piece.is(PieceKind::King, enemy))
        })
}
