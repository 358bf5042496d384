//! Board storage and square queries
//!
//! Provides fundamental board operations used throughout the crate:
//! - Piece lookup by square
//! - Occupancy and color queries
//! - Starting layouts
//! - Text rendering
//!
//! Writes are crate-private. Outside code changes a board only by applying
//! moves to the [`crate::GameState`] that owns it.

use std::fmt;

use crate::config::Layout;
use crate::constants::{BACK_RANK, BOARD_SIZE};
use crate::types::{Color, Piece, PieceKind, Square};

/// 8x8 grid of piece slots, indexed `[rank][file]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces
    pub const fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Board for the given starting layout
    pub fn with_layout(layout: Layout) -> Self {
        match layout {
            Layout::Standard => standard_board(),
            Layout::Reduced => reduced_board(),
        }
    }

    /// Get piece at square
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Color of the piece on `square`, `None` when empty
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Check if the square holds a piece of `color`
    #[inline]
    pub fn piece_belongs_to(&self, square: Square, color: Color) -> bool {
        self.color_at(square) == Some(color)
    }

    /// All occupied squares, rank 8 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// Squares holding a king of `color`
    pub fn find_kings(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.is(PieceKind::King, color))
            .map(|(square, _)| square)
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }

    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }
}

impl Default for Board {
    fn default() -> Self {
        standard_board()
    }
}

/// Renders rank 8 at the top, White uppercase, Black lowercase, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..BOARD_SIZE as u8 {
            write!(f, "{} ", BOARD_SIZE as u8 - rank)?;
            for file in 0..BOARD_SIZE as u8 {
                let symbol = self
                    .get(Square::at(file, rank))
                    .map_or('.', Piece::symbol);
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in 0..BOARD_SIZE as u8 {
            write!(f, " {}", (b'a' + file) as char)?;
        }
        writeln!(f)
    }
}

fn standard_board() -> Board {
    let mut board = Board::empty();
    let last = (BOARD_SIZE - 1) as u8;

    for (file, kind) in BACK_RANK.iter().enumerate() {
        let file = file as u8;
        board.set(Square::at(file, 0), Some(Piece::new(*kind, Color::Black)));
        board.set(Square::at(file, 1), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        board.set(Square::at(file, last - 1), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(Square::at(file, last), Some(Piece::new(*kind, Color::White)));
    }

    board
}

fn reduced_board() -> Board {
    let mut board = Board::empty();
    let placements = [
        (Square::at(3, 7), PieceKind::King, Color::White),
        (Square::at(3, 0), PieceKind::King, Color::Black),
        (Square::at(0, 0), PieceKind::Rook, Color::Black),
        (Square::at(1, 0), PieceKind::Bishop, Color::Black),
        (Square::at(2, 0), PieceKind::Knight, Color::Black),
    ];

    for (square, kind, color) in placements {
        board.set(square, Some(Piece::new(kind, color)));
    }

    board
}
