//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - Whose turn it is
//! - What actions are legal
//! - How actions produce new states
//! - Win/draw conditions and terminal utility

use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::core::Player;
use crate::error::Result;

/// Legal action list.
///
/// SmallVec keeps up to 9 actions inline, which covers every tic-tac-toe
/// position without a heap allocation.
pub type ActionList<A> = SmallVec<[A; 9]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Utility from X's point of view: +1 X wins, -1 O wins, 0 draw.
    #[must_use]
    pub fn utility(&self) -> i8 {
        match self {
            GameResult::Winner(Player::X) => 1,
            GameResult::Winner(Player::O) => -1,
            GameResult::Draw => 0,
        }
    }
}

/// Rules engine trait for two-player, zero-sum, perfect-information games.
///
/// Search and match code only ever talk to a game through this trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: Must not mutate the input state; returns a new one
/// - `legal_actions`: Enumeration order is the search tie-break order
/// - `result`: Return `None` if the game continues
/// - `utility`: Only meaningful for terminal states
pub trait RulesEngine {
    /// Game state. Hashable so the search can memoize values.
    type State: Clone + Eq + Hash + Debug + Send + Sync;

    /// A single move.
    type Action: Clone + Eq + Debug + Send + Sync;

    /// The starting position.
    fn initial_state(&self) -> Self::State;

    /// Player whose turn it is.
    fn current_player(&self, state: &Self::State) -> Player;

    /// All legal actions for the current player.
    ///
    /// Returns empty only when the state has no moves left.
    fn legal_actions(&self, state: &Self::State) -> ActionList<Self::Action>;

    /// Produce the state after the current player takes `action`.
    ///
    /// The input state is never modified, even on error.
    fn apply_action(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    /// The player who has completed a winning line, if any.
    fn winner(&self, state: &Self::State) -> Option<Player>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn result(&self, state: &Self::State) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check whether the state is terminal.
    fn is_terminal(&self, state: &Self::State) -> bool {
        self.result(state).is_some()
    }

    /// Terminal utility: +1 X wins, -1 O wins, 0 otherwise.
    ///
    /// Non-terminal states also return 0; callers must not rely on it.
    fn utility(&self, state: &Self::State) -> i8 {
        self.result(state).map_or(0, |result| result.utility())
    }
}
