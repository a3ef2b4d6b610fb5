//! Standard 3×3 tic-tac-toe.
//!
//! - X moves first and players alternate
//! - A player wins by completing a row, column, or diagonal
//! - A full board with no completed line is a draw
//!
//! The side to move is always derived from mark counts, never stored.

mod game;

pub use game::{TicTacToe, WIN_LINES};
