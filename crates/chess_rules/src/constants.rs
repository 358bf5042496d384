//! Board geometry constants
//!
//! Direction vectors are `(d_rank, d_file)` pairs. Because rank index 0 is the
//! 8th rank, `d_rank = -1` points towards Black's side of the board.

use crate::types::PieceKind;

/// Squares per side
pub const BOARD_SIZE: usize = 8;

/// Longest possible ray on an 8x8 board
pub const MAX_RAY_STEPS: usize = BOARD_SIZE - 1;

/// Rook directions: up, down, right, left
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Bishop directions
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

/// Back rank from the a-file to the h-file, identical for both colors.
///
/// The king starts on the d-file and the queen on the e-file.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
