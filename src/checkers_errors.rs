//! Errors used throughout the checkers engine.
//!
//! Rule legality is never reported through this type: an illegal human move
//! is simply absent from the generated successor set. `CheckersError` covers
//! malformed input (layouts, move text), engine misuse, and I/O.

use thiserror::Error;

pub type CheckersResult<T> = Result<T, CheckersError>;

#[derive(Debug, Error)]
pub enum CheckersError {
    /// A layout character is not one of `_`, `b`, `B`, `p`, `P`.
    #[error("unknown square symbol '{symbol}' at row {row}, column {col}")]
    UnknownSquareSymbol { symbol: char, row: usize, col: usize },

    /// The layout or row data does not form an N×N grid.
    #[error("board must be square: row {row} has {found} squares, expected {expected}")]
    NonSquareBoard {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("board is {size}x{size}; at most {max}x{max} is supported")]
    BoardTooLarge { size: usize, max: usize },

    #[error("board layout is empty")]
    EmptyLayout,

    /// A move token could not be read as `<row letter><column>`.
    #[error("invalid move token '{0}'")]
    InvalidMoveToken(String),

    #[error("coordinate {token} is off the {size}x{size} board")]
    CoordinateOutOfBounds { token: String, size: usize },

    #[error("a move needs at least two squares, got {0}")]
    MoveTooShort(usize),

    /// The bot engine was asked to move in a position where the player acts.
    #[error("engine asked to move but it is not the bot's turn")]
    NotBotsMove,

    /// An engine answered with a position that is not a legal successor.
    #[error("engine '{engine}' returned an illegal move: {path}")]
    IllegalEngineMove { engine: String, path: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
