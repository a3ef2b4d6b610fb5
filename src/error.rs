//! Error types.
//!
//! Applying a move is the only fallible rules operation. The error is
//! recoverable: the board the move was attempted on is left untouched, and a
//! front end is expected to discard the move and ask again.
//!
//! Boards built from raw cells (deserialization) are checked separately and
//! fail with [`InvalidBoardError`].

use thiserror::Error;

use crate::core::Mark;

/// A move that cannot be played on the given board.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidMoveError {
    #[error("invalid move: ({row}, {col}) is out of bounds (must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid move: ({row}, {col}) is already occupied by {mark}")]
    Occupied { row: usize, col: usize, mark: Mark },
}

/// Cells that do not form a reachable board: X must lead O by 0 or 1 marks.
///
/// Raised when a board comes from outside the rules engine, such as JSON.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("invalid board: {x} X marks and {o} O marks (X must lead by 0 or 1)")]
pub struct InvalidBoardError {
    pub x: usize,
    pub o: usize,
}

/// Convenience type alias for results using the crate's error type.
pub type Result<T> = std::result::Result<T, InvalidMoveError>;
