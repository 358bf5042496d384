//! # chess-record
//!
//! Keeps a game as a flat list of `e2e4`-style moves and replays it through
//! [`chess_rules`]. The list is only ever accepted as a whole: loading a file
//! or editing the record succeeds only if every move still replays legally
//! from the starting position.
//!
//! - `record` - The move list, its edits, file format and replay
//! - `settings` - Rule switches and defaults persisted as JSON
//! - `cli` - Command line front end

pub mod cli;
pub mod error;
pub mod record;
pub mod settings;

pub use error::{RecordError, RecordResult};
pub use record::MoveRecord;
pub use settings::Settings;
