//! # Core Types - Squares, Pieces and Moves
//!
//! ## Coordinates
//!
//! A [`Square`] is a `(file, rank)` pair with both components in `0..8`.
//! File 0 is the a-file. Rank index 0 is the **8th** rank, so the board is
//! stored top-down the way it is printed:
//!
//! ```text
//! rank index 0 -> "8"   r n b k q b n r
//! rank index 7 -> "1"   R N B K Q B N R
//! ```
//!
//! White therefore advances towards *decreasing* rank indices and Black
//! towards increasing ones.
//!
//! ## Empty squares
//!
//! The board stores `Option<Piece>`. An empty square is `None`, so a piece
//! with a kind but no color (or the reverse) cannot be represented.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::constants::BOARD_SIZE;
use crate::error::ParseError;

/// Side of a piece, and the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Rank step of a forward pawn move for this color
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank index where this color's pawns promote
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => (BOARD_SIZE - 1) as u8,
        }
    }

    /// Array slot used by per-color caches
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Board letter, uppercase
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A piece standing on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Set the first time the piece moves; gates the pawn double step
    pub has_moved: bool,
}

impl Piece {
    /// An unmoved piece
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Letter used by the text board: uppercase White, lowercase Black
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }
}

/// A board square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Square at `(file, rank)`, or `None` off the board
    pub const fn new(file: u8, rank: u8) -> Option<Square> {
        if (file as usize) < BOARD_SIZE && (rank as usize) < BOARD_SIZE {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// Caller guarantees both coordinates are in range.
    pub(crate) const fn at(file: u8, rank: u8) -> Square {
        debug_assert!((file as usize) < BOARD_SIZE && (rank as usize) < BOARD_SIZE);
        Square { file, rank }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Rank index; 0 is the 8th rank
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// The square `(d_rank, d_file)` away, or `None` past the edge
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if rank < 0 || file < 0 {
            return None;
        }
        Square::new(file as u8, rank as u8)
    }

    /// Iterate all 64 squares, rank 8 first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|rank| (0..BOARD_SIZE as u8).map(move |file| Square::at(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file) as char;
        let rank = (b'8' - self.rank) as char;
        write!(f, "{file}{rank}")
    }
}

/// A move from one square to another
///
/// Carries no piece information; the board decides what moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Signed rank delta, destination minus source
    #[inline]
    pub fn d_rank(self) -> i8 {
        self.to.rank as i8 - self.from.rank as i8
    }

    /// Signed file delta, destination minus source
    #[inline]
    pub fn d_file(self) -> i8 {
        self.to.file as i8 - self.from.file as i8
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Piece kinds a pawn may promote to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PromotionPiece {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl From<PromotionPiece> for PieceKind {
    fn from(piece: PromotionPiece) -> PieceKind {
        match piece {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }
}

impl FromStr for PromotionPiece {
    type Err = ParseError;

    /// Accepts `q`, `r`, `b`, `n` or the full piece name, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q" | "queen" => Ok(PromotionPiece::Queen),
            "r" | "rook" => Ok(PromotionPiece::Rook),
            "b" | "bishop" => Ok(PromotionPiece::Bishop),
            "n" | "knight" => Ok(PromotionPiece::Knight),
            _ => Err(ParseError::InvalidPromotion {
                found: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PromotionPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        PieceKind::from(*self).fmt(f)
    }
}
