//! Exhaustive minimax search.
//!
//! ## Overview
//!
//! Plays out every line from the given state to a terminal state and picks
//! the action that is optimal for the player to move, assuming both sides
//! play optimally. X maximizes utility, O minimizes it.
//!
//! - **Exact**: no pruning, no heuristic cut-off
//! - **Deterministic**: ties go to the first action in `legal_actions` order
//! - **Optional transposition table**: memoizes board values
//! - **Optional root parallelism**: one rayon task per root action
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_minimax::games::tictactoe::TicTacToe;
//! use tictactoe_minimax::rules::RulesEngine;
//! use tictactoe_minimax::search::{MinimaxSearch, SearchConfig};
//!
//! let game = TicTacToe;
//! let config = SearchConfig::new().with_transposition_table(true);
//! let mut search = MinimaxSearch::new(game, config);
//!
//! let board = game.initial_state();
//! let result = search.search_with_value(&board).unwrap();
//!
//! // Tic-tac-toe is a draw under optimal play.
//! assert_eq!(result.value, 0);
//! println!("{} nodes searched", search.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

// Re-export main types
pub use config::SearchConfig;
pub use minimax::{MinimaxSearch, SearchResult};
pub use stats::SearchStats;
