//! Record file format
//!
//! One four-character move per line, in play order, no header:
//!
//! ```text
//! e2e4
//! e7e5
//! g1f3
//! ```
//!
//! Surrounding whitespace and blank lines are ignored when reading.

use std::fs;
use std::path::Path;

use chess_rules::parse_move;
use tracing::info;

use super::MoveRecord;
use crate::error::{RecordError, RecordResult};
use crate::settings::Settings;

/// Parse record text without checking legality
///
/// # Errors
///
/// [`RecordError::Parse`] with the 1-based line number of the first
/// malformed move.
pub fn parse_record(text: &str) -> RecordResult<MoveRecord> {
    let mut moves = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mv = parse_move(line).map_err(|source| RecordError::Parse {
            line: index + 1,
            source,
        })?;
        moves.push(mv);
    }

    Ok(MoveRecord::from_moves(moves))
}

pub fn format_record(record: &MoveRecord) -> String {
    record.into_iter().map(|mv| format!("{mv}\n")).collect()
}

/// Read a record file and check that it replays legally
pub fn load_record(path: &Path, settings: &Settings) -> RecordResult<MoveRecord> {
    let text = fs::read_to_string(path)?;
    let record = parse_record(&text)?;
    record.replay(settings)?;

    info!("[RECORD] Loaded {} moves from {:?}", record.len(), path);
    Ok(record)
}

pub fn save_record(path: &Path, record: &MoveRecord) -> RecordResult<()> {
    fs::write(path, format_record(record))?;
    info!("[RECORD] Saved {} moves to {:?}", record.len(), path);
    Ok(())
}
