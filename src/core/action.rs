//! Action representation: a target cell.
//!
//! An action is just a `(row, col)` pair. It carries no mark: the mark
//! placed is always the current player's, derived from the board. An action
//! is only meaningful relative to a board where the cell is empty; the
//! rules engine rejects anything else.

use serde::{Deserialize, Serialize};

use super::mark::Player;

/// Zero-based coordinates of the cell to mark.
///
/// Coordinates are not range-checked on construction so that callers can
/// pass raw input straight through and let
/// [`RulesEngine::apply_action`](crate::rules::RulesEngine::apply_action)
/// report the problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    /// Create an action targeting `(row, col)`.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for match replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord<A = Action> {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: A,

    /// Ply number (0 for X's opening move).
    pub ply: u32,
}

impl<A> ActionRecord<A> {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: A, ply: u32) -> Self {
        Self {
            player,
            action,
            ply,
        }
    }
}
