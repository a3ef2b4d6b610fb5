//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Turn order
//! - Legal actions for each game state
//! - How actions produce new states
//! - Win/draw conditions
//!
//! The search calls into `RulesEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{ActionList, GameResult, RulesEngine};
