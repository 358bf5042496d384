//! # Game State - Board, Side to Move and King Cache
//!
//! [`GameState`] owns the [`Board`] and keeps a per-color index of where each
//! king stands. The index is denormalized: every write to the board goes
//! through [`GameState::commit`], which moves the piece and updates the cache
//! in the same step, so the two can never disagree.
//!
//! A state has exactly two observable modes, "White to move" and "Black to
//! move". The mode flips on each committed move and at no other time.
//!
//! Cloning is cheap (a 64-slot array plus a few bytes) and is how the check
//! detector tries a move without touching the real game.

use tracing::trace;

use crate::attack::is_king_attacked;
use crate::board::Board;
use crate::config::{Layout, RulesConfig};
use crate::error::SetupError;
use crate::types::{Color, Move, Piece, PieceKind, Square};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    /// Indexed by [`Color::index`]
    king_squares: [Square; 2],
    rules: RulesConfig,
}

impl GameState {
    /// Standard opening position with default rules, White to move
    pub fn new() -> Self {
        Self::with_config(Layout::Standard, RulesConfig::default())
    }

    /// A fresh game from `layout` under `rules`
    pub fn with_config(layout: Layout, rules: RulesConfig) -> Self {
        let board = Board::with_layout(layout);
        // Both built-in layouts put the kings on the d-file.
        let king_squares = [Square::at(3, 7), Square::at(3, 0)];

        GameState {
            board,
            side_to_move: Color::White,
            king_squares,
            rules,
        }
    }

    /// Build a custom position
    ///
    /// # Errors
    ///
    /// Fails unless each color has exactly one king and no square is listed
    /// twice. The side not on move must not be in check; that covers kings
    /// standing next to each other.
    pub fn from_placement(
        pieces: &[(Square, Piece)],
        side_to_move: Color,
        rules: RulesConfig,
    ) -> Result<Self, SetupError> {
        let mut board = Board::empty();
        for &(square, piece) in pieces {
            if !board.is_empty(square) {
                return Err(SetupError::SquareTaken { square });
            }
            board.set(square, Some(piece));
        }

        let white_king = single_king(&board, Color::White)?;
        let black_king = single_king(&board, Color::Black)?;

        let waiting = !side_to_move;
        let waiting_king = match waiting {
            Color::White => white_king,
            Color::Black => black_king,
        };
        if is_king_attacked(&board, waiting_king, waiting) {
            return Err(SetupError::WaitingSideInCheck { color: waiting });
        }

        Ok(GameState {
            board,
            side_to_move,
            king_squares: [white_king, black_king],
            rules,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// Cached square of `color`'s king
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    /// Write `mv` to the board without any validation.
    ///
    /// Marks the piece as moved, follows a moving king with the cache,
    /// swaps in `promote_to` when given, and passes the turn. A null move or
    /// an empty source leaves the state untouched.
    pub(crate) fn commit(&mut self, mv: Move, promote_to: Option<PieceKind>) {
        if mv.is_null() {
            return;
        }
        let Some(mut piece) = self.board.take(mv.from()) else {
            return;
        };

        piece.has_moved = true;
        if piece.kind == PieceKind::King {
            self.king_squares[piece.color.index()] = mv.to();
        }
        if let Some(kind) = promote_to {
            piece.kind = kind;
        }

        self.board.set(mv.to(), Some(piece));
        self.side_to_move = !self.side_to_move;
        trace!("[MOVE] committed {} ({} {})", mv, piece.color, piece.kind);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn single_king(board: &Board, color: Color) -> Result<Square, SetupError> {
    let mut kings = board.find_kings(color);
    let first = kings.next().ok_or(SetupError::MissingKing { color })?;
    match kings.next() {
        Some(second) => Err(SetupError::DuplicateKing {
            color,
            first,
            second,
        }),
        None => Ok(first),
    }
}
