//! Cell contents and player identification.
//!
//! ## Mark
//!
//! Three-valued cell content: `X`, `O`, or `Empty`. There is no fourth
//! value and no `Option` wrapper, so an unfilled cell is always explicit.
//!
//! ## Player
//!
//! The side to move. Never stored on a board: it is derived from mark
//! counts by the rules engine.

use serde::{Deserialize, Serialize};

/// Content of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
    #[default]
    Empty,
}

impl Mark {
    /// Check if the cell is unoccupied.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// The player owning this mark, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }

    /// Single-character form used by `Display` on boards.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the two sides. X always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player places.
    #[must_use]
    pub const fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    /// Whether this player maximizes utility (X) or minimizes it (O).
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Player::X)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.mark().symbol())
    }
}
