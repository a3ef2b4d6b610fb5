//! Seeded randomness for weaker agents.
//!
//! Minimax never draws random numbers. Only
//! [`RandomAgent`](crate::arena::RandomAgent) does, and a given seed must
//! replay the same game so that match outcomes can be asserted in tests.
//!
//! ```
//! use tictactoe_minimax::core::GameRng;
//!
//! let cells = [0, 1, 2, 3, 4, 5, 6, 7, 8];
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.choose(&cells), b.choose(&cells));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Start a stream from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform element of `items`, or `None` when it is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
