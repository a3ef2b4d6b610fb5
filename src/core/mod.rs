//! Core engine types: marks, players, boards, actions, RNG.
//!
//! These are plain values with no rules attached. Rules live in
//! [`crate::games::tictactoe`].

pub mod mark;
pub mod board;
pub mod action;
pub mod rng;

pub use mark::{Mark, Player};
pub use board::{Board, CELLS, SIZE};
pub use action::{Action, ActionRecord};
pub use rng::GameRng;
