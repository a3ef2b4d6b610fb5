//! Game implementations.
//!
//! Each game implements [`RulesEngine`](crate::rules::RulesEngine) so it can
//! be driven by [`crate::search`] and [`crate::arena`].

pub mod tictactoe;
