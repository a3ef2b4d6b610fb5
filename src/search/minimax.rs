//! Exhaustive minimax search.
//!
//! Scores every line of play down to a terminal state. X maximizes utility,
//! O minimizes it. Max and min nodes share one recursion with a direction
//! flag. Ties at the root keep the first action in `legal_actions` order.
//!
//! Internally a node's score is an `i32`. In the default mode it is just the
//! utility. With `prefer_quick_wins` a terminal win scores `±WIN_SCORE` and
//! every ply above it moves the score one step toward zero, so the sign
//! (the game value) is unchanged and a nearer win compares higher. The score
//! depends only on the state, never on the path, so it can be cached.

use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::rules::RulesEngine;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Terminal win score under `prefer_quick_wins`. Must exceed the longest
/// possible game in plies.
const WIN_SCORE: i32 = 1_000;

/// An optimal action together with its minimax value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<A> {
    /// The recommended action.
    pub action: A,

    /// Game value after playing `action` under optimal play:
    /// +1 X wins, -1 O wins, 0 draw.
    pub value: i8,
}

/// Minimax search context.
///
/// Generic over the rules engine type. Owns the engine and configuration,
/// and keeps statistics for the most recent call.
///
/// ## Example
///
/// ```
/// use tictactoe_minimax::core::{Action, Board, Mark};
/// use tictactoe_minimax::games::tictactoe::TicTacToe;
/// use tictactoe_minimax::search::{MinimaxSearch, SearchConfig};
///
/// const X: Mark = Mark::X;
/// const O: Mark = Mark::O;
/// const E: Mark = Mark::Empty;
///
/// // X to move. (1, 0), (1, 2) and (2, 2) all force a win.
/// let board = Board::from_rows([[X, O, E], [E, X, E], [O, E, E]]);
///
/// // Plain minimax: every win scores +1, the first in row-major order is kept.
/// let mut search = MinimaxSearch::new(TicTacToe, SearchConfig::default());
/// assert_eq!(search.search(&board), Some(Action::new(1, 0)));
///
/// // Distance scoring picks the immediate diagonal win.
/// let config = SearchConfig::new().with_prefer_quick_wins(true);
/// let mut search = MinimaxSearch::new(TicTacToe, config);
/// assert_eq!(search.search(&board), Some(Action::new(2, 2)));
/// ```
pub struct MinimaxSearch<E: RulesEngine> {
    /// The game rules engine.
    engine: E,

    /// Search configuration.
    config: SearchConfig,

    /// Statistics for the last call.
    stats: SearchStats,
}

impl<E: RulesEngine + Sync> MinimaxSearch<E> {
    /// Create a new search context.
    pub fn new(engine: E, config: SearchConfig) -> Self {
        Self {
            engine,
            config,
            stats: SearchStats::default(),
        }
    }

    /// Statistics from the most recent `search`, `search_with_value` or
    /// `evaluate` call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the optimal action for the player to move.
    ///
    /// Returns `None` if the state is terminal (there is no move to make).
    pub fn search(&mut self, state: &E::State) -> Option<E::Action> {
        self.search_with_value(state).map(|result| result.action)
    }

    /// Find the optimal action and its minimax value.
    ///
    /// Returns `None` if the state is terminal.
    pub fn search_with_value(&mut self, state: &E::State) -> Option<SearchResult<E::Action>> {
        let start = Instant::now();
        self.stats.reset();

        if self.engine.is_terminal(state) {
            self.stats.record_elapsed(start.elapsed());
            debug!("minimax called on terminal state, no move");
            return None;
        }

        let player = self.engine.current_player(state);
        let maximizing = player.is_maximizer();
        let scored = self.score_root(state, maximizing);

        // Strict comparison: the first action reaching the best score wins.
        let mut best: Option<(E::Action, i32)> = None;
        for (action, score) in scored {
            trace!(?action, score, "root action scored");
            let improves = match &best {
                None => true,
                Some((_, current)) if maximizing => score > *current,
                Some((_, current)) => score < *current,
            };
            if improves {
                best = Some((action, score));
            }
        }
        let best = best.map(|(action, score)| SearchResult {
            action,
            value: game_value(score),
        });

        self.stats.record_elapsed(start.elapsed());

        if let Some(result) = &best {
            debug!(
                %player,
                action = ?result.action,
                value = result.value,
                nodes = self.stats.nodes,
                cache_hits = self.stats.cache_hits,
                time_us = self.stats.time_us,
                "minimax search complete"
            );
        }

        best
    }

    /// Game-theoretic value of a state under optimal play.
    ///
    /// Terminal states return their utility.
    pub fn evaluate(&mut self, state: &E::State) -> i8 {
        let start = Instant::now();
        self.stats.reset();

        let maximizing = self.engine.current_player(state).is_maximizer();
        let mut evaluator = Evaluator::new(&self.engine, &self.config);
        let score = evaluator.score(state, maximizing);

        self.stats.merge(&evaluator.stats);
        self.stats.record_elapsed(start.elapsed());
        game_value(score)
    }

    /// Score every root action in enumeration order.
    ///
    /// Each child is valued from the opponent's side: X's children are min
    /// nodes and O's children are max nodes.
    fn score_root(&mut self, state: &E::State, maximizing: bool) -> Vec<(E::Action, i32)> {
        let children = children(&self.engine, state);

        if self.config.parallel_root {
            let engine = &self.engine;
            let config = &self.config;
            // Indexed collect keeps enumeration order for the tie-break.
            let branches: Vec<(E::Action, i32, SearchStats)> = children
                .into_vec()
                .into_par_iter()
                .map(|(action, child)| {
                    let mut evaluator = Evaluator::new(engine, config);
                    let score = evaluator.score(&child, !maximizing);
                    (action, score, evaluator.stats)
                })
                .collect();

            branches
                .into_iter()
                .map(|(action, score, stats)| {
                    self.stats.merge(&stats);
                    (action, score)
                })
                .collect()
        } else {
            let mut evaluator = Evaluator::new(&self.engine, &self.config);
            let scored = children
                .into_iter()
                .map(|(action, child)| {
                    let score = evaluator.score(&child, !maximizing);
                    (action, score)
                })
                .collect();

            self.stats.merge(&evaluator.stats);
            scored
        }
    }
}

/// Game value (+1 / -1 / 0) carried by an internal score.
fn game_value(score: i32) -> i8 {
    score.signum() as i8
}

/// Recursive score computation with an optional transposition table.
struct Evaluator<'a, E: RulesEngine> {
    engine: &'a E,
    cache: Option<FxHashMap<E::State, i32>>,
    quick_wins: bool,
    stats: SearchStats,
}

impl<'a, E: RulesEngine> Evaluator<'a, E> {
    fn new(engine: &'a E, config: &SearchConfig) -> Self {
        Self {
            engine,
            cache: config.transposition_table.then(FxHashMap::default),
            quick_wins: config.prefer_quick_wins,
            stats: SearchStats::default(),
        }
    }

    /// MaxValue when `maximizing`, MinValue otherwise.
    fn score(&mut self, state: &E::State, maximizing: bool) -> i32 {
        self.stats.nodes += 1;

        if let Some(&cached) = self.cache.as_ref().and_then(|cache| cache.get(state)) {
            self.stats.cache_hits += 1;
            return cached;
        }

        let score = match self.engine.result(state) {
            Some(result) => {
                self.stats.terminal_nodes += 1;
                let utility = i32::from(result.utility());
                if self.quick_wins {
                    utility * WIN_SCORE
                } else {
                    utility
                }
            }
            None => {
                let children = children(self.engine, state);
                if children.is_empty() {
                    warn!(?state, "non-terminal state has no playable action, scoring as a draw");
                    0
                } else {
                    let mut best = if maximizing { i32::MIN } else { i32::MAX };
                    for (_, child) in children {
                        let score = self.score(&child, !maximizing);
                        if maximizing {
                            best = best.max(score);
                        } else {
                            best = best.min(score);
                        }
                    }
                    if self.quick_wins {
                        best - best.signum()
                    } else {
                        best
                    }
                }
            }
        };

        if let Some(cache) = self.cache.as_mut() {
            cache.insert(state.clone(), score);
        }
        score
    }
}

/// Apply every legal action, keeping enumeration order.
///
/// An action the engine lists but then rejects is a rules bug; it is logged
/// and skipped rather than aborting the search.
fn children<E: RulesEngine>(
    engine: &E,
    state: &E::State,
) -> SmallVec<[(E::Action, E::State); 9]> {
    engine
        .legal_actions(state)
        .into_iter()
        .filter_map(|action| match engine.apply_action(state, &action) {
            Ok(child) => Some((action, child)),
            Err(err) => {
                warn!(%err, ?action, "rules engine rejected its own legal action");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Board, Mark, Player};
    use crate::games::tictactoe::TicTacToe;
    use crate::rules::{ActionList, GameResult};

    const X: Mark = Mark::X;
    const O: Mark = Mark::O;
    const E: Mark = Mark::Empty;

    fn search(config: SearchConfig) -> MinimaxSearch<TicTacToe> {
        MinimaxSearch::new(TicTacToe, config)
    }

    #[test]
    fn test_terminal_returns_none() {
        let mut search = search(SearchConfig::default());
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);

        assert_eq!(search.search(&board), None);
        assert_eq!(search.search_with_value(&board), None);
        assert_eq!(search.stats().nodes, 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut search = search(SearchConfig::default());
        // X to move, (0, 2) completes the top row.
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);

        let result = search.search_with_value(&board).unwrap();
        assert_eq!(result.action, Action::new(0, 2));
        assert_eq!(result.value, 1);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        let mut search = search(SearchConfig::default());
        // O to move and can win on the middle row at (1, 2).
        let board = Board::from_rows([[X, X, E], [O, O, E], [X, E, E]]);

        let result = search.search_with_value(&board).unwrap();
        assert_eq!(result.action, Action::new(1, 2));
        assert_eq!(result.value, -1);
    }

    #[test]
    fn test_tie_break_keeps_first_action() {
        let mut search = search(SearchConfig::default());
        // X to move; both (1, 2) and (2, 2) win immediately. (1, 2) is first.
        let board = Board::from_rows([[X, O, O], [X, X, E], [O, E, E]]);

        assert_eq!(search.search(&board), Some(Action::new(1, 2)));
    }

    #[test]
    fn test_evaluate_terminal_is_utility() {
        let mut search = search(SearchConfig::default());
        let board = Board::from_rows([[X, X, O], [X, O, E], [O, E, E]]);

        assert_eq!(search.evaluate(&board), -1);
        assert_eq!(search.stats().nodes, 1);
        assert_eq!(search.stats().terminal_nodes, 1);
    }

    #[test]
    fn test_stats_counted() {
        let mut search = search(SearchConfig::default());
        let board = Board::from_rows([[X, O, E], [E, X, E], [O, E, E]]);

        search.search(&board);
        let stats = search.stats();
        assert!(stats.nodes > 0);
        assert!(stats.terminal_nodes > 0);
        assert!(stats.terminal_nodes <= stats.nodes);
        assert_eq!(stats.cache_hits, 0);
    }

    /// Never ends and never offers a move.
    struct Stalled;

    impl RulesEngine for Stalled {
        type State = u8;
        type Action = u8;

        fn initial_state(&self) -> u8 {
            0
        }

        fn current_player(&self, _state: &u8) -> Player {
            Player::X
        }

        fn legal_actions(&self, _state: &u8) -> ActionList<u8> {
            ActionList::new()
        }

        fn apply_action(&self, state: &u8, _action: &u8) -> crate::error::Result<u8> {
            Ok(*state)
        }

        fn winner(&self, _state: &u8) -> Option<Player> {
            None
        }

        fn result(&self, _state: &u8) -> Option<GameResult> {
            None
        }
    }

    #[test]
    fn test_state_without_actions_scores_as_draw() {
        let configs = [
            SearchConfig::default(),
            SearchConfig::new().with_prefer_quick_wins(true),
        ];
        for config in configs {
            let mut search = MinimaxSearch::new(Stalled, config);

            assert_eq!(search.evaluate(&0), 0);
            assert_eq!(search.search_with_value(&0), None);
        }
    }

    /// Lists two actions and rejects both.
    struct Rejecting;

    impl RulesEngine for Rejecting {
        type State = u8;
        type Action = u8;

        fn initial_state(&self) -> u8 {
            0
        }

        fn current_player(&self, _state: &u8) -> Player {
            Player::O
        }

        fn legal_actions(&self, _state: &u8) -> ActionList<u8> {
            ActionList::from_slice(&[1, 2])
        }

        fn apply_action(&self, _state: &u8, action: &u8) -> crate::error::Result<u8> {
            Err(crate::error::InvalidMoveError::OutOfBounds {
                row: usize::from(*action),
                col: 0,
            })
        }

        fn winner(&self, _state: &u8) -> Option<Player> {
            None
        }

        fn result(&self, _state: &u8) -> Option<GameResult> {
            None
        }
    }

    #[test]
    fn test_rejected_actions_do_not_read_as_a_win() {
        // O minimizes; an empty child list must not leave i32::MAX behind.
        let mut search = MinimaxSearch::new(Rejecting, SearchConfig::default());

        assert_eq!(search.evaluate(&0), 0);
    }

    #[test]
    fn test_transposition_table_hits() {
        let mut search = search(SearchConfig::new().with_transposition_table(true));
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);

        search.search(&board);
        assert!(search.stats().cache_hits > 0);
    }
}
