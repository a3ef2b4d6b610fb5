//! Agents: anything that picks an action for a state.
//!
//! - `MinimaxAgent`: optimal play through [`MinimaxSearch`]
//! - `RandomAgent`: uniform over legal actions, seeded

use crate::core::GameRng;
use crate::rules::RulesEngine;
use crate::search::{MinimaxSearch, SearchConfig, SearchStats};

/// A player in a match.
pub trait Agent<E: RulesEngine> {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Choose an action for the player to move.
    ///
    /// Returns `None` if the agent has nothing to play (terminal state).
    fn choose_action(&mut self, engine: &E, state: &E::State) -> Option<E::Action>;
}

/// Plays the minimax-optimal action every turn.
#[derive(Clone, Debug, Default)]
pub struct MinimaxAgent {
    config: SearchConfig,
    last_stats: SearchStats,
}

impl MinimaxAgent {
    /// Create an agent searching with `config`.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            last_stats: SearchStats::default(),
        }
    }

    /// Statistics from the agent's most recent search.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }
}

impl<E: RulesEngine + Clone + Sync> Agent<E> for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_action(&mut self, engine: &E, state: &E::State) -> Option<E::Action> {
        let mut search = MinimaxSearch::new(engine.clone(), self.config.clone());
        let action = search.search(state);
        self.last_stats = search.stats().clone();
        action
    }
}

/// Picks uniformly among legal actions.
///
/// Deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent with its own RNG seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<E: RulesEngine> Agent<E> for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_action(&mut self, engine: &E, state: &E::State) -> Option<E::Action> {
        let actions = engine.legal_actions(state);
        self.rng.choose(&actions).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Board, Mark};
    use crate::games::tictactoe::TicTacToe;

    #[test]
    fn test_minimax_agent_records_stats() {
        let game = TicTacToe;
        let board = Board::from_rows([
            [Mark::X, Mark::X, Mark::Empty],
            [Mark::O, Mark::O, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::Empty],
        ]);
        let mut agent = MinimaxAgent::default();

        let action = agent.choose_action(&game, &board);
        assert_eq!(action, Some(Action::new(0, 2)));
        assert!(agent.last_stats().nodes > 0);
    }

    #[test]
    fn test_random_agent_picks_legal_action() {
        let game = TicTacToe;
        let board = Board::from_rows([
            [Mark::X, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::O],
            [Mark::O, Mark::X, Mark::Empty],
        ]);
        let mut agent = RandomAgent::new(7);

        for _ in 0..10 {
            assert_eq!(agent.choose_action(&game, &board), Some(Action::new(2, 2)));
        }
    }

    #[test]
    fn test_random_agent_deterministic() {
        let game = TicTacToe;
        let board = Board::empty();
        let mut a = RandomAgent::new(99);
        let mut b = RandomAgent::new(99);

        for _ in 0..20 {
            assert_eq!(a.choose_action(&game, &board), b.choose_action(&game, &board));
        }
    }

    #[test]
    fn test_agents_return_none_on_full_board() {
        let game = TicTacToe;
        let board = Board::from_rows([
            [Mark::X, Mark::O, Mark::X],
            [Mark::X, Mark::O, Mark::O],
            [Mark::O, Mark::X, Mark::X],
        ]);

        assert_eq!(RandomAgent::new(1).choose_action(&game, &board), None);
        assert_eq!(MinimaxAgent::default().choose_action(&game, &board), None);
    }
}
