use std::path::PathBuf;

/// Reasons a placement is refused. A refused placement leaves the engine
/// untouched and notifies no observer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,

    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("cell {index} does not touch an occupied cell")]
    NotAdjacent { index: usize },
}

/// Errors from replaying a move list without the terminal UI.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("move {index} is outside the {width}x{height} board")]
    OutOfRange {
        index: usize,
        width: usize,
        height: usize,
    },

    #[error("failed to write transcript: {0}")]
    Io(#[from] std::io::Error),
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
