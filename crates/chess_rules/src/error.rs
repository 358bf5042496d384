//! Error types for move validation
//!
//! Every rejection is a plain value returned to the caller. None of them is
//! fatal and none of them leaves a [`crate::GameState`] partially updated.

use crate::types::{Color, Move, PieceKind, Square};
use thiserror::Error;

/// Errors produced while reading move notation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Notation must be exactly four characters long
    #[error("Expected 4 characters (e.g. e2e4), got {len}")]
    Length { len: usize },

    /// File letter outside `a..=h`
    #[error("Invalid file '{found}' at position {position} (must be a-h)")]
    InvalidFile { position: usize, found: char },

    /// Rank digit outside `1..=8`
    #[error("Invalid rank '{found}' at position {position} (must be 1-8)")]
    InvalidRank { position: usize, found: char },

    /// Promotion letter outside `q`, `r`, `b`, `n`
    #[error("Invalid promotion piece '{found}' (must be one of q, r, b, n)")]
    InvalidPromotion { found: String },
}

/// Reasons a structurally valid move is refused
///
/// Checked in declaration order; the first failing condition wins.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejected {
    /// Source and destination are the same square
    #[error("Piece didn't move ({square} to {square})")]
    NoMovement { square: Square },

    /// Nothing stands on the source square
    #[error("No piece at {square}")]
    NoPieceAtSource { square: Square },

    /// The piece belongs to the side that is not on move
    #[error("Piece at {square} is {color}, but it is not {color}'s turn")]
    WrongSideToMove { square: Square, color: Color },

    /// The piece cannot make this move (shape or blocked path)
    #[error("Illegal {kind} move {mv}")]
    GeometryIllegal { kind: PieceKind, mv: Move },

    /// The destination holds a piece of the mover's own color
    #[error("Destination {square} is occupied by a {color} piece")]
    DestinationOccupiedBySameColor { square: Square, color: Color },

    /// The move would leave the mover's king attacked
    #[error("Move {mv} leaves the {color} king in check")]
    SelfCheck { mv: Move, color: Color },
}

/// Either failure of the text entry path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Rejected(#[from] MoveRejected),
}

/// Invalid custom starting positions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A side has no king on the board
    #[error("No {color} king in the position")]
    MissingKing { color: Color },

    /// A side has more than one king
    #[error("Two {color} kings in the position ({first} and {second})")]
    DuplicateKing {
        color: Color,
        first: Square,
        second: Square,
    },

    /// Two pieces were placed on the same square
    #[error("Square {square} is occupied twice")]
    SquareTaken { square: Square },

    /// The side that just moved is left in check, so its king could be taken
    #[error("The {color} king is in check but it is not {color}'s turn")]
    WaitingSideInCheck { color: Color },
}

/// Result type alias for notation parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type alias for move validation and application
pub type MoveResult<T> = Result<T, MoveRejected>;
