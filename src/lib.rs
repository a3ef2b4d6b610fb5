//! # tictactoe-minimax
//!
//! Tic-tac-toe rules and an exhaustive minimax player.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: Applying an action returns a new board. The
//!    input is never touched, so the search can branch freely.
//!
//! 2. **Rules Behind a Trait**: The search only sees `RulesEngine`. It knows
//!    nothing about marks, lines or grid shape.
//!
//! 3. **Deterministic Choices**: Ties between equally valued actions go to
//!    the first action in `legal_actions` order. Optimizations never change
//!    the chosen action.
//!
//! ## Architecture
//!
//! - **Minimax**: Full-depth search. X maximizes, O minimizes. Utility is
//!   +1 for an X win, -1 for an O win, 0 for a draw.
//!
//! - **Optional Speedups**: A transposition table keyed by board, and
//!   root-level parallelism on the rayon pool. Both are off by default.
//!
//! ## Modules
//!
//! - `core`: Marks, players, boards, actions, RNG
//! - `error`: Invalid move errors
//! - `rules`: RulesEngine trait and game results
//! - `games`: The tic-tac-toe rules engine
//! - `search`: Minimax search, configuration and statistics
//! - `arena`: Agents and automated matches

pub mod core;
pub mod error;
pub mod rules;
pub mod games;
pub mod search;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{Action, ActionRecord, Board, GameRng, Mark, Player, CELLS, SIZE};

pub use crate::error::{InvalidBoardError, InvalidMoveError, Result};

pub use crate::rules::{ActionList, GameResult, RulesEngine};

pub use crate::games::tictactoe::{TicTacToe, WIN_LINES};

pub use crate::search::{MinimaxSearch, SearchConfig, SearchResult, SearchStats};

pub use crate::arena::{
    play_match, run_series, Agent, MatchRecord, MinimaxAgent, RandomAgent, SeriesConfig,
    SeriesResult,
};
