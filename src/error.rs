//! Error types for the oxo crate

use thiserror::Error;

use crate::tictactoe::{Mark, Position};

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position ({row}, {col}) is out of bounds (must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid move: position {position} is already occupied")]
    CellOccupied { position: Position },

    #[error("cannot restore position {position}: the cell is already empty")]
    CellAlreadyEmpty { position: Position },

    #[error("game already over: {winner} has a winning line")]
    GameOver { winner: Mark },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("both players use mark {mark}")]
    DuplicateMark { mark: Mark },

    #[error("player {player} broke the turn contract: {reason}")]
    TurnContract { player: String, reason: String },

    #[error("board string has the wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("input closed while waiting for {expected}")]
    InputClosed { expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid progress bar template: {message}")]
    ProgressBarTemplate { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
