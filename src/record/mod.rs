//! Move record - The game as an ordered list of moves
//!
//! The record owns the history; the rules core never does. A position is
//! obtained by replaying the record from the starting layout.
//!
//! # Edits
//!
//! Every edit ([`MoveRecord::extend_validated`], [`MoveRecord::insert_after`],
//! [`MoveRecord::remove`]) is built on a copy and committed only if the whole
//! edited list replays legally. A failed edit leaves the record as it was
//! and reports the first illegal move by its 1-based number.
//!
//! # Module Structure
//!
//! - `format` - Newline-delimited text files
//! - `replay` - Running a move list through the rules core

pub mod format;
pub mod replay;


pub use format::{format_record, load_record, parse_record, save_record};
pub use replay::replay;

use std::fmt::Write as _;

use chess_rules::{GameState, Move};
use tracing::debug;

use crate::error::{RecordError, RecordResult};
use crate::settings::Settings;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveRecord {
    /// Index 0 = move 1 (White's first move)
    moves: Vec<Move>,
}

impl MoveRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a move list without checking it
    pub fn from_moves(moves: Vec<Move>) -> Self {
        MoveRecord { moves }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Move by 1-based number
    pub fn get(&self, number: usize) -> Option<Move> {
        number.checked_sub(1).and_then(|index| self.moves.get(index).copied())
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Numbered listing, one move per line: ` 1. e2e4`
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for (index, mv) in self.moves.iter().enumerate() {
            let _ = writeln!(out, " {}. {}", index + 1, mv);
        }
        out
    }

    /// Position after every move
    pub fn replay(&self, settings: &Settings) -> RecordResult<GameState> {
        replay(&self.moves, settings)
    }

    /// Position after the first `upto` moves, `upto` in `1..=len`
    pub fn replay_upto(&self, upto: usize, settings: &Settings) -> RecordResult<GameState> {
        if upto == 0 || upto > self.len() {
            return Err(RecordError::OutOfRange {
                number: upto,
                len: self.len(),
            });
        }
        replay(&self.moves[..upto], settings)
    }

    /// Append `moves` at the end
    pub fn extend_validated(&mut self, moves: &[Move], settings: &Settings) -> RecordResult<GameState> {
        let mut candidate = self.moves.clone();
        candidate.extend_from_slice(moves);
        self.commit_edit(candidate, settings)
    }

    /// Insert `moves` after move number `after`; 0 inserts before move 1
    pub fn insert_after(
        &mut self,
        after: usize,
        moves: &[Move],
        settings: &Settings,
    ) -> RecordResult<GameState> {
        if after > self.len() {
            return Err(RecordError::OutOfRange {
                number: after,
                len: self.len(),
            });
        }

        let mut candidate = self.moves.clone();
        candidate.splice(after..after, moves.iter().copied());
        self.commit_edit(candidate, settings)
    }

    /// Remove the moves with the given 1-based numbers
    pub fn remove(&mut self, numbers: &[usize], settings: &Settings) -> RecordResult<GameState> {
        let mut indices = Vec::with_capacity(numbers.len());
        for &number in numbers {
            if number == 0 || number > self.len() {
                return Err(RecordError::OutOfRange {
                    number,
                    len: self.len(),
                });
            }
            indices.push(number - 1);
        }
        indices.sort_unstable();
        indices.dedup();

        let mut candidate = self.moves.clone();
        for index in indices.into_iter().rev() {
            candidate.remove(index);
        }
        self.commit_edit(candidate, settings)
    }

    fn commit_edit(&mut self, candidate: Vec<Move>, settings: &Settings) -> RecordResult<GameState> {
        match replay(&candidate, settings) {
            Ok(state) => {
                debug!("[RECORD] Edit accepted ({} -> {} moves)", self.len(), candidate.len());
                self.moves = candidate;
                Ok(state)
            }
            Err(e) => {
                debug!("[RECORD] Edit discarded: {}", e);
                Err(e)
            }
        }
    }
}

impl<'a> IntoIterator for &'a MoveRecord {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
