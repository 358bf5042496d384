//! Public API for move validation and application
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Validation and commit (validate_move, apply_move, apply_notation)
//! - `promotion` - The [`PromotionChooser`] hook

mod game;
mod moves;
mod promotion;


pub use game::{new_game, reset_game};
pub use moves::{apply_move, apply_notation, is_legal_move, validate_move};
pub use promotion::PromotionChooser;
