//! # chess_rules - Move Validation Core
//!
//! Validates chess moves written in four-character `file-rank-file-rank`
//! notation (`e2e4`) and rejects any move that would leave the mover's own
//! king attacked.
//!
//! ## Pipeline
//!
//! 1. [`notation`] parses text into a [`Move`]
//! 2. [`rules`] checks the piece-specific shape and obstruction
//! 3. [`attack`] replays the move on a scratch copy and probes the king
//! 4. [`api`] commits the move, updating the king cache and side to move
//!
//! Nothing here performs I/O. Pawn promotion asks the caller through a
//! [`PromotionChooser`] instead of prompting a terminal.
//!
//! ```rust,ignore
//! use chess_rules::{apply_notation, GameState, PromotionPiece};
//!
//! let mut state = GameState::new();
//! apply_notation(&mut state, "e2e4", &mut PromotionPiece::Queen)?;
//! assert!(!state.white_to_move());
//! ```

pub mod api;
pub mod attack;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod notation;
pub mod rules;
pub mod state;
pub mod types;

pub use api::{apply_move, apply_notation, is_legal_move, validate_move, PromotionChooser};
pub use attack::{is_check_after, is_in_check};
pub use board::Board;
pub use config::{Layout, RulesConfig};
pub use error::{MoveError, MoveRejected, ParseError, SetupError};
pub use notation::{parse_move, parse_square, unparse_move};
pub use rules::{is_legal, scan_direction};
pub use state::GameState;
pub use types::{Color, Move, Piece, PieceKind, PromotionPiece, Square};
