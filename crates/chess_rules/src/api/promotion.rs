//! Pawn promotion hook
//!
//! When a pawn reaches the far rank the applicator asks a
//! [`PromotionChooser`] which piece it becomes. The chooser is only consulted
//! after the move has passed every check, and at most once per move.
//!
//! ```rust,ignore
//! // Fixed answer
//! apply_move(&mut state, mv, &mut PromotionPiece::Knight)?;
//!
//! // Decided by the caller at the time of promotion
//! apply_move(&mut state, mv, &mut |color, square| ask_player(color, square))?;
//! ```

use crate::types::{Color, PromotionPiece, Square};

pub trait PromotionChooser {
    /// Piece for a `color` pawn promoting on `square`
    fn choose(&mut self, color: Color, square: Square) -> PromotionPiece;
}

impl PromotionChooser for PromotionPiece {
    fn choose(&mut self, _color: Color, _square: Square) -> PromotionPiece {
        *self
    }
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color, Square) -> PromotionPiece,
{
    fn choose(&mut self, color: Color, square: Square) -> PromotionPiece {
        self(color, square)
    }
}
