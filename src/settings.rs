//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file.
//!
//! # File Location
//!
//! An explicit `--config <path>` wins. Otherwise `settings.json` in the
//! platform configuration directory is used, e.g.
//! `~/.config/chess-record/settings.json` on Linux, falling back to the
//! working directory when no such directory exists.
//!
//! # Error Handling
//!
//! Loading never fails: a missing or unreadable file falls back to the
//! defaults with a warning. Saving reports errors to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use chess_rules::{Layout, PromotionPiece, RulesConfig};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::RecordResult;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User preferences applied to every replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rule switches passed to the core
    pub rules: RulesConfig,
    /// Starting position for replays
    pub layout: Layout,
    /// Piece a pawn becomes when the record reaches a promotion
    pub default_promotion: PromotionPiece,
}

/// Resolve the default settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chess-record") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        // Fallback to current directory
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from `path`, or from [`settings_path`] when `None`
pub fn load_settings(path: Option<&Path>) -> Settings {
    let settings_path = path.map_or_else(settings_path, Path::to_path_buf);

    if !settings_path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", settings_path);
        return Settings::default();
    }

    match fs::read_to_string(&settings_path) {
        Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", settings_path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                    settings_path, e
                );
                Settings::default()
            }
        },
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                settings_path, e
            );
            Settings::default()
        }
    }
}

/// Write `settings` as pretty JSON, creating the directory if needed
///
/// # Returns
///
/// The path written to.
pub fn save_settings(settings: &Settings, path: Option<&Path>) -> RecordResult<PathBuf> {
    let settings_path = path.map_or_else(settings_path, Path::to_path_buf);

    if let Some(parent) = settings_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&settings_path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", settings_path);

    Ok(settings_path)
}
