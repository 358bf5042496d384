//! Error types for the record shell
//!
//! Covers everything outside the rules core: reading and writing record
//! files, settings persistence, and record edits that break the game.

use chess_rules::{Move, MoveRejected, ParseError};
use thiserror::Error;

/// Errors that can occur while loading, editing or replaying a record
#[derive(Error, Debug)]
pub enum RecordError {
    /// Record or settings file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    Settings(#[from] serde_json::Error),

    /// A line of a record file is not a valid move
    #[error("Line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// Replaying the record hit a move the rules refuse
    #[error("Move {number} ({mv}) is illegal: {source}")]
    Illegal {
        number: usize,
        mv: Move,
        #[source]
        source: MoveRejected,
    },

    /// A move number outside the record
    #[error("Move number {number} is out of range (record has {len} moves)")]
    OutOfRange { number: usize, len: usize },
}

/// Result type alias for record operations
pub type RecordResult<T> = Result<T, RecordError>;
