use std::path::PathBuf;

use crate::game::Piece;

/// A drop that the board cannot accept. The board is never modified when
/// one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveError {
    #[error("column {column} is out of range")]
    OutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors from driving a [`GameState`](crate::game::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Illegal(#[from] IllegalMoveError),

    #[error("it is not {0:?}'s turn")]
    NotYourTurn(Piece),

    #[error("game is over")]
    GameOver,
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
