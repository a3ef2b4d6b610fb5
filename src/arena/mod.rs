//! Programmatic matches between agents.
//!
//! There is no interactive front end here: agents are plain values that
//! pick actions, and `play_match` drives one game from the initial state to
//! a terminal state. Useful for checking that optimal play draws, and that
//! the minimax agent never loses to weaker opponents.

pub mod agent;
pub mod runner;

pub use agent::{Agent, MinimaxAgent, RandomAgent};
pub use runner::{play_match, run_series, MatchRecord, SeriesConfig, SeriesResult};
