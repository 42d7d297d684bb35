use std::path::PathBuf;

use crate::game::Symbol;

/// Errors raised while reading answers from a player or the setup prompts.
///
/// Malformed answers are retried by the prompt loops; only a closed or broken
/// input stream ends up here.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input closed before a valid answer was given")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while rendering the board.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write board: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode board snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while running a match.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("match is already over")]
    GameOver,

    #[error("both players use the {0:?} symbol")]
    DuplicateSymbol(Symbol),

    #[error("player input failed: {0}")]
    Input(#[from] InputError),

    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
