use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{MAX_DIMENSION, STANDARD_COLUMNS, STANDARD_ROWS};
use crate::render::SnapshotFormat;

/// Default board size offered at the setup prompts.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: STANDARD_COLUMNS,
            rows: STANDARD_ROWS,
        }
    }
}

/// Machine opponent names and RNG seeding.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub random_name: String,
    pub heuristic_name: String,
    /// Fixed seed for machine players; fresh entropy when unset
    pub seed: Option<u64>,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            random_name: "Forrest".to_string(),
            heuristic_name: "Albert".to_string(),
            seed: None,
        }
    }
}

/// Optional board snapshot file for external viewers.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    pub path: Option<PathBuf>,
    pub format: SnapshotFormat,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub snapshot: SnapshotConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = 1..=MAX_DIMENSION;
        if !range.contains(&self.board.columns) {
            return Err(ConfigError::Validation(format!(
                "board.columns must be in 1..={MAX_DIMENSION}"
            )));
        }
        if !range.contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in 1..={MAX_DIMENSION}"
            )));
        }

        if self.players.random_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.random_name must not be empty".into(),
            ));
        }
        if self.players.heuristic_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.heuristic_name must not be empty".into(),
            ));
        }
        if self.players.random_name == self.players.heuristic_name {
            return Err(ConfigError::Validation(
                "players.random_name and players.heuristic_name must differ".into(),
            ));
        }

        if let Some(path) = &self.snapshot.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(
                    "snapshot.path must not be empty".into(),
                ));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
