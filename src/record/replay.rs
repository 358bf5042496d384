//! Replaying a move list through the rules core

use chess_rules::api::new_game;
use chess_rules::{apply_move, GameState, Move};
use tracing::debug;

use crate::error::{RecordError, RecordResult};
use crate::settings::Settings;

/// Play `moves` from the configured starting layout
///
/// Promotions take `settings.default_promotion`; the record format does
/// not store a choice.
///
/// # Errors
///
/// [`RecordError::Illegal`] with the 1-based number of the first move the
/// rules refuse.
pub fn replay(moves: &[Move], settings: &Settings) -> RecordResult<GameState> {
    let mut state = new_game(settings.layout, settings.rules);
    let mut promotion = settings.default_promotion;

    for (index, &mv) in moves.iter().enumerate() {
        apply_move(&mut state, mv, &mut promotion).map_err(|source| RecordError::Illegal {
            number: index + 1,
            mv,
            source,
        })?;
    }

    debug!("[RECORD] Replayed {} moves", moves.len());
    Ok(state)
}
