// Configuration loading and parsing (proptrack.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Books consulted in order when picking a consensus line. Matched by
/// substring, so "DraftKings" also covers regional variants of the brand.
pub const MAJOR_BOOKMAKERS: &[&str] =
    &["DraftKings", "FanDuel", "BetMGM", "Caesars", "BetRivers"];

const DEFAULT_MIN_GAMES_SKATER: usize = 5;
const DEFAULT_MIN_GAMES_GOALIE: usize = 3;

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub bookmaker_priority: Vec<String>,
    pub min_games_skater: usize,
    pub min_games_goalie: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("snapshot.json"),
            bookmaker_priority: MAJOR_BOOKMAKERS.iter().map(|s| s.to_string()).collect(),
            min_games_skater: DEFAULT_MIN_GAMES_SKATER,
            min_games_goalie: DEFAULT_MIN_GAMES_GOALIE,
        }
    }
}

// Raw deserialization shape; every field optional so partial files work.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    snapshot_path: Option<PathBuf>,
    bookmaker_priority: Option<Vec<String>>,
    min_games_skater: Option<usize>,
    min_games_goalie: Option<usize>,
}

impl Config {
    fn assemble(file: ConfigFile) -> Self {
        let defaults = Config::default();
        Config {
            snapshot_path: file.snapshot_path.unwrap_or(defaults.snapshot_path),
            bookmaker_priority: file
                .bookmaker_priority
                .unwrap_or(defaults.bookmaker_priority),
            min_games_skater: file.min_games_skater.unwrap_or(defaults.min_games_skater),
            min_games_goalie: file.min_games_goalie.unwrap_or(defaults.min_games_goalie),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_games_skater == 0 {
            return Err(ConfigError::ValidationError {
                field: "min_games_skater".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.min_games_goalie == 0 {
            return Err(ConfigError::ValidationError {
                field: "min_games_goalie".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from a TOML file; missing keys fall back to defaults.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;
    let config = Config::assemble(file);
    config.validate()?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}
