//! Move validation and execution
//!
//! Validation runs every check against an immutable borrow before anything
//! is written, so a rejected move leaves the state exactly as it was.

use tracing::{debug, info};

use super::promotion::PromotionChooser;
use crate::attack::is_check_after;
use crate::error::{MoveError, MoveRejected, MoveResult};
use crate::notation::parse_move;
use crate::rules::is_legal;
use crate::state::GameState;
use crate::types::{Move, Piece, PieceKind};

/// Run all checks for `mv` without changing anything
///
/// Checks, in order:
/// - the piece actually moves
/// - there is a piece on the source square
/// - it belongs to the side to move
/// - the piece can make this move on this board
/// - the destination holds no piece of the same color
/// - the mover's king is not left in check
///
/// # Returns
///
/// The piece that would move.
///
/// # Errors
///
/// The first [`MoveRejected`] reason that applies.
pub fn validate_move(state: &GameState, mv: Move) -> MoveResult<Piece> {
    if mv.is_null() {
        return Err(MoveRejected::NoMovement { square: mv.from() });
    }

    let piece = state
        .board()
        .get(mv.from())
        .ok_or(MoveRejected::NoPieceAtSource { square: mv.from() })?;

    if piece.color != state.side_to_move() {
        return Err(MoveRejected::WrongSideToMove {
            square: mv.from(),
            color: piece.color,
        });
    }

    if !is_legal(state, mv) {
        return Err(MoveRejected::GeometryIllegal {
            kind: piece.kind,
            mv,
        });
    }

    if state.board().piece_belongs_to(mv.to(), piece.color) {
        return Err(MoveRejected::DestinationOccupiedBySameColor {
            square: mv.to(),
            color: piece.color,
        });
    }

    if is_check_after(state, mv) {
        return Err(MoveRejected::SelfCheck {
            mv,
            color: piece.color,
        });
    }

    Ok(piece)
}

/// Check if `mv` would be accepted by [`apply_move`]
pub fn is_legal_move(state: &GameState, mv: Move) -> bool {
    validate_move(state, mv).is_ok()
}

/// Validate and commit `mv`
///
/// On success the piece is marked as moved, the king cache follows a moving
/// king, a pawn reaching the far rank becomes the piece `promotion` picks,
/// and the turn passes to the other side.
///
/// # Errors
///
/// Returns the rejection from [`validate_move`]; `state` is unchanged and
/// `promotion` is not consulted.
///
/// # Examples
///
/// ```rust,ignore
/// let mut state = GameState::new();
/// apply_move(&mut state, "e2e4".parse()?, &mut PromotionPiece::Queen)?;
/// ```
pub fn apply_move<P>(state: &mut GameState, mv: Move, promotion: &mut P) -> MoveResult<()>
where
    P: PromotionChooser + ?Sized,
{
    let piece = match validate_move(state, mv) {
        Ok(piece) => piece,
        Err(reason) => {
            debug!("[MOVE] Rejected {}: {}", mv, reason);
            return Err(reason);
        }
    };

    let promote_to = if piece.kind == PieceKind::Pawn && mv.to().rank() == piece.color.promotion_rank()
    {
        let choice = promotion.choose(piece.color, mv.to());
        info!("[PROMOTION] {} pawn on {} promotes to {}", piece.color, mv.to(), choice);
        Some(PieceKind::from(choice))
    } else {
        None
    };

    state.commit(mv, promote_to);
    debug!("[MOVE] {} played {}", piece.color, mv);
    Ok(())
}

/// Parse `text` and apply it
///
/// # Errors
///
/// [`MoveError::Parse`] for malformed text, [`MoveError::Rejected`] for a
/// refused move.
pub fn apply_notation<P>(state: &mut GameState, text: &str, promotion: &mut P) -> Result<Move, MoveError>
where
    P: PromotionChooser + ?Sized,
{
    let mv = parse_move(text)?;
    apply_move(state, mv, promotion)?;
    Ok(mv)
}
