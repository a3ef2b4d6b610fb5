//! Board representation: a fixed 3×3 grid of marks.
//!
//! `Board` is `Copy` and has no interior mutability. Rules code produces a
//! new value for every move, so a caller holding an earlier board never
//! observes a change and search branches stay independent.
//!
//! Whose turn it is is not stored here; see
//! [`RulesEngine::current_player`](crate::rules::RulesEngine::current_player).

use serde::{Deserialize, Serialize};

use crate::error::InvalidBoardError;

use super::action::Action;
use super::mark::Mark;

/// Number of rows (and columns).
pub const SIZE: usize = 3;

/// Number of cells.
pub const CELLS: usize = SIZE * SIZE;

/// A 3×3 grid stored row-major.
///
/// ## Example
///
/// ```
/// use tictactoe_minimax::core::{Board, Mark};
///
/// let board = Board::from_rows([
///     [Mark::X, Mark::O, Mark::Empty],
///     [Mark::Empty, Mark::X, Mark::Empty],
///     [Mark::O, Mark::Empty, Mark::Empty],
/// ]);
///
/// assert_eq!(board.get(1, 1), Some(Mark::X));
/// assert_eq!(board.empty_count(), 5);
/// ```
///
/// Serializes as a flat row-major array of nine marks. Deserializing checks
/// the mark counts and rejects boards that play could not produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Mark; CELLS]", into = "[Mark; CELLS]")]
pub struct Board {
    cells: [Mark; CELLS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Mark::Empty; CELLS],
        }
    }

    /// Build a board from three rows.
    ///
    /// Mark counts are only checked in debug builds: boards handed to the
    /// rules engine must have X-count minus O-count equal to 0 or 1.
    #[must_use]
    pub fn from_rows(rows: [[Mark; SIZE]; SIZE]) -> Self {
        let mut cells = [Mark::Empty; CELLS];
        for (r, row) in rows.iter().enumerate() {
            cells[r * SIZE..(r + 1) * SIZE].copy_from_slice(row);
        }

        let board = Self { cells };
        debug_assert!(
            board.has_valid_counts(),
            "X count minus O count must be 0 or 1: {board:?}"
        );
        board
    }

    /// Copy out the three rows.
    #[must_use]
    pub fn rows(&self) -> [[Mark; SIZE]; SIZE] {
        let mut rows = [[Mark::Empty; SIZE]; SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[r * SIZE..(r + 1) * SIZE]);
        }
        rows
    }

    /// Get the mark at `(row, col)`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        if row < SIZE && col < SIZE {
            Some(self.cells[row * SIZE + col])
        } else {
            None
        }
    }

    /// Get the mark targeted by an action, or `None` if out of range.
    #[must_use]
    pub fn at(&self, action: Action) -> Option<Mark> {
        self.get(action.row, action.col)
    }

    /// Return a copy with `mark` written at `(row, col)`.
    ///
    /// Performs no legality checks; the caller has already validated the
    /// coordinates.
    #[must_use]
    pub(crate) fn with_mark(mut self, row: usize, col: usize, mark: Mark) -> Self {
        self.cells[row * SIZE + col] = mark;
        self
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Mark; CELLS] {
        &self.cells
    }

    /// Count cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.count(Mark::Empty)
    }

    /// Number of occupied cells (plies played so far).
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        CELLS - self.empty_count()
    }

    /// Check whether no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }

    /// Check the alternating-turn invariant: X leads O by 0 or 1 marks.
    #[must_use]
    pub fn has_valid_counts(&self) -> bool {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        x == o || x == o + 1
    }
}

impl TryFrom<[Mark; CELLS]> for Board {
    type Error = InvalidBoardError;

    fn try_from(cells: [Mark; CELLS]) -> Result<Self, Self::Error> {
        let board = Self { cells };
        if board.has_valid_counts() {
            Ok(board)
        } else {
            Err(InvalidBoardError {
                x: board.count(Mark::X),
                o: board.count(Mark::O),
            })
        }
    }
}

impl From<Board> for [Mark; CELLS] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.chunks(SIZE).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for mark in row {
                write!(f, "{mark}")?;
            }
        }
        Ok(())
    }
}
