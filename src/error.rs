//! Error types for the tic-tac-toe engine

use thiserror::Error;

use crate::{tictactoe::Player, types::Coord};

/// Main error type for the engine
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board state: {0}")]
    InvalidBoardState(#[from] BoardViolation),

    #[error(
        "illegal move{}: {reason}",
        .coord.map(|c| format!(" at {c}")).unwrap_or_default()
    )]
    IllegalMove {
        coord: Option<Coord>,
        reason: MoveViolation,
    },

    #[error("no legal move available")]
    NoLegalMove,

    #[error("board string has {got} cells, expected {expected} in '{context}'")]
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

    #[error("coordinate ({row}, {col}) is out of bounds (rows and columns are 0-2)")]
    InvalidCoord { row: usize, col: usize },

    #[error("invalid player '{player}' (expected 'x' or 'o')")]
    InvalidPlayer { player: String },

    #[error("state code {code} is out of range (must be below {limit})")]
    InvalidStateCode { code: u32, limit: u32 },

    #[error("invalid value table: {message}")]
    InvalidValueTable { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },
}

/// The rule a rejected board breaks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardViolation {
    #[error("expected 3 rows, got {got}")]
    RowCount { got: usize },

    #[error("expected 3 columns in row {row}, got {got}")]
    ColumnCount { row: usize, got: usize },

    #[error("unrecognized cell symbol {symbol} at ({row}, {col})")]
    UnknownSymbol { row: usize, col: usize, symbol: i64 },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    PieceCounts { x_count: usize, o_count: usize },

    #[error("both players have a completed line")]
    DoubleWin,
}

/// The reason a move was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveViolation {
    #[error("cell is already occupied")]
    Occupied,

    #[error("the game has already ended")]
    GameOver,

    #[error("it is {expected}'s turn, not {got}'s")]
    WrongTurn { expected: Player, got: Player },
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
