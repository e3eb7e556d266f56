//! Error types for the game core and configuration loading

use std::path::PathBuf;

use crate::board::{Player, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Errors reported by board placement and move selection.
///
/// Every variant is a local, recoverable rejection: the board is left exactly
/// as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board")]
    InvalidCoordinate { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("the game is over; reset the board to play again")]
    MoveAfterGameOver,

    #[error("it is not {player:?}'s turn")]
    OutOfTurn { player: Player },

    #[error("no candidate moves available")]
    NoCandidateMoves,

    #[error("board size {size} is below the minimum of {}", MIN_BOARD_SIZE)]
    BoardTooSmall { size: usize },

    #[error("board size {size} exceeds the maximum of {}", MAX_BOARD_SIZE)]
    BoardTooLarge { size: usize },
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
    Validation(#[from] GameError),
}
