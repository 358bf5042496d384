//! Ray scanning
//!
//! Walks from a square in one of the eight directions until it meets a piece
//! or leaves the board. Used for two questions:
//! - is the path between a sliding piece and its destination clear?
//! - which piece first meets a ray cast outward from a king?
//!
//! The walk is an iterative loop capped at [`MAX_RAY_STEPS`].

use crate::board::Board;
use crate::constants::MAX_RAY_STEPS;
use crate::types::{Piece, Square};

/// First occupied square in direction `(d_rank, d_file)`
///
/// Scanning starts one step away from `from`; `from` itself is never
/// reported. Returns `None` when the edge is reached without meeting a
/// piece, or for the zero direction.
///
/// # Examples
///
/// ```rust,ignore
/// // From d1 looking up the d-file of the opening position
/// let hit = scan_direction(state.board(), d1, -1, 0);
/// assert_eq!(hit.map(|(sq, _)| sq.to_string()), Some("d2".into()));
/// ```
pub fn scan_direction(
    board: &Board,
    from: Square,
    d_rank: i8,
    d_file: i8,
) -> Option<(Square, Piece)> {
    if d_rank == 0 && d_file == 0 {
        return None;
    }

    let mut current = from;
    for _ in 0..MAX_RAY_STEPS {
        current = current.offset(d_rank, d_file)?;
        if let Some(piece) = board.get(current) {
            return Some((current, piece));
        }
    }

    None
}

/// Check that every square strictly between `from` and `to` is empty
///
/// Only meaningful for straight or diagonal lines; any other pair, and the
/// null move, returns `false`. The destination itself is not examined.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_rank = to.rank() as i8 - from.rank() as i8;
    let d_file = to.file() as i8 - from.file() as i8;

    let on_line = d_rank == 0 || d_file == 0 || d_rank.abs() == d_file.abs();
    if !on_line || (d_rank == 0 && d_file == 0) {
        return false;
    }

    let distance = d_rank.abs().max(d_file.abs());
    match scan_direction(board, from, d_rank.signum(), d_file.signum()) {
        None => true,
        Some((blocker, _)) => steps_between(from, blocker) >= distance,
    }
}

/// King-step distance between two squares
fn steps_between(a: Square, b: Square) -> i8 {
    let d_rank = (a.rank() as i8 - b.rank() as i8).abs();
    let d_file = (a.file() as i8 - b.file() as i8).abs();
    d_rank.max(d_file)
}
