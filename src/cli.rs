//! Command line front end
//!
//! Every command loads the settings, applies the global overrides, then
//! works on one record file. Edits are saved only when they replay legally.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chess_rules::{is_in_check, GameState, Move, PromotionPiece};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::record::{load_record, save_record, MoveRecord};
use crate::settings::{load_settings, save_settings, settings_path, Settings};

#[derive(Parser, Debug)]
#[command(name = "chess-record")]
#[command(about = "Validate, replay and edit chess move records", long_about = None)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Promotion piece used during replay: q, r, b or n
    #[arg(long, global = true, value_name = "PIECE")]
    pub promote: Option<PromotionPiece>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the numbered move list
    Show { file: PathBuf },

    /// Print the board after the whole record or after move N
    Replay {
        file: PathBuf,

        #[arg(long, value_name = "N")]
        upto: Option<usize>,
    },

    /// Append moves and save; a missing file starts a new record
    Play {
        file: PathBuf,

        #[arg(required = true)]
        moves: Vec<Move>,
    },

    /// Insert moves after move N (0 = before the first move)
    Insert {
        file: PathBuf,

        #[arg(long, value_name = "N")]
        after: usize,

        #[arg(required = true)]
        moves: Vec<Move>,
    },

    /// Delete moves by number
    Remove {
        file: PathBuf,

        #[arg(required = true)]
        numbers: Vec<usize>,
    },

    /// Exit with an error unless the record replays legally
    Check { file: PathBuf },

    /// Print the effective settings
    Config {
        /// Save them to the settings file
        #[arg(long)]
        write: bool,
    },
}

impl Cli {
    /// Settings from disk with the command line overrides applied
    pub fn settings(&self) -> Settings {
        let mut settings = load_settings(self.config.as_deref());
        if let Some(piece) = self.promote {
            settings.default_promotion = piece;
        }
        settings
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let settings = cli.settings();

    match cli.command {
        Command::Show { file } => {
            let record = open(&file, &settings)?;
            print!("{}", record.listing());
        }
        Command::Replay { file, upto } => {
            let record = open(&file, &settings)?;
            let state = match upto {
                Some(n) => record.replay_upto(n, &settings)?,
                None => record.replay(&settings)?,
            };
            print_position(&state);
        }
        Command::Play { file, moves } => {
            let mut record = if file.exists() {
                open(&file, &settings)?
            } else {
                info!("[RECORD] Starting new record at {:?}", file);
                MoveRecord::new()
            };
            let state = record.extend_validated(&moves, &settings)?;
            store(&file, &record)?;
            print_position(&state);
        }
        Command::Insert { file, after, moves } => {
            let mut record = open(&file, &settings)?;
            let state = record.insert_after(after, &moves, &settings)?;
            store(&file, &record)?;
            print_position(&state);
        }
        Command::Remove { file, numbers } => {
            let mut record = open(&file, &settings)?;
            let state = record.remove(&numbers, &settings)?;
            store(&file, &record)?;
            print_position(&state);
        }
        Command::Check { file } => {
            let record = open(&file, &settings)?;
            println!("{}: {} legal moves", file.display(), record.len());
        }
        Command::Config { write } => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            if write {
                let path = save_settings(&settings, cli.config.as_deref())?;
                println!("Saved to {}", path.display());
            } else {
                let path = cli.config.clone().unwrap_or_else(settings_path);
                println!("Settings file: {}", path.display());
            }
        }
    }

    Ok(())
}

fn open(file: &Path, settings: &Settings) -> Result<MoveRecord> {
    load_record(file, settings).with_context(|| format!("Failed to load {}", file.display()))
}

fn store(file: &Path, record: &MoveRecord) -> Result<()> {
    save_record(file, record).with_context(|| format!("Failed to save {}", file.display()))
}

fn print_position(state: &GameState) {
    let side = state.side_to_move();
    println!("{}", state.board());
    if is_in_check(state, side) {
        println!("{side} to move (in check)");
    } else {
        println!("{side} to move");
    }
}
