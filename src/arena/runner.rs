//! Match runner for playing games between agents.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Action, ActionRecord, Board, Player};
use crate::error::Result;
use crate::rules::{GameResult, RulesEngine};

use super::agent::Agent;

/// A finished (or abandoned) game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord<S = Board, A: Clone = Action> {
    /// Every action played, in order.
    pub history: Vector<ActionRecord<A>>,

    /// The last state reached.
    pub final_state: S,

    /// Outcome, or `None` if an agent gave up on a non-terminal state.
    pub result: Option<GameResult>,
}

impl<S, A: Clone> MatchRecord<S, A> {
    /// Number of plies played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.history.len()
    }
}

/// Play one game from the initial state.
///
/// The agent for the player to move acts each ply. An illegal action ends
/// the match with the error; the history up to that point is discarded.
pub fn play_match<E: RulesEngine>(
    engine: &E,
    x_agent: &mut dyn Agent<E>,
    o_agent: &mut dyn Agent<E>,
) -> Result<MatchRecord<E::State, E::Action>> {
    let mut state = engine.initial_state();
    let mut history = Vector::new();
    let mut ply = 0u32;

    while !engine.is_terminal(&state) {
        let player = engine.current_player(&state);
        let agent: &mut dyn Agent<E> = match player {
            Player::X => &mut *x_agent,
            Player::O => &mut *o_agent,
        };

        let Some(action) = agent.choose_action(engine, &state) else {
            debug!(agent = agent.name(), %player, ply, "agent returned no action");
            break;
        };

        state = engine.apply_action(&state, &action)?;
        debug!(agent = agent.name(), %player, ply, ?action, "action played");
        history.push_back(ActionRecord::new(player, action, ply));
        ply += 1;
    }

    let result = engine.result(&state);
    Ok(MatchRecord {
        history,
        final_state: state,
        result,
    })
}

/// Configuration for a series of games between two agents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Number of games to play.
    pub games: u32,

    /// Swap sides every game. Otherwise the first agent always plays X.
    pub alternate_sides: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            alternate_sides: true,
        }
    }
}

/// Tally of a series, from the first agent's point of view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Games an agent abandoned before a terminal state.
    pub incomplete: u32,
}

impl SeriesResult {
    /// Total games recorded.
    #[must_use]
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws + self.incomplete
    }
}

/// Play a series of games between `first` and `second`.
pub fn run_series<E: RulesEngine>(
    engine: &E,
    first: &mut dyn Agent<E>,
    second: &mut dyn Agent<E>,
    config: &SeriesConfig,
) -> Result<SeriesResult> {
    let mut tally = SeriesResult::default();

    for game in 0..config.games {
        let first_side = if config.alternate_sides && game % 2 == 1 {
            Player::O
        } else {
            Player::X
        };

        let record = match first_side {
            Player::X => play_match(engine, first, second)?,
            Player::O => play_match(engine, second, first)?,
        };

        match record.result {
            Some(result) if result.is_winner(first_side) => tally.wins += 1,
            Some(GameResult::Draw) => tally.draws += 1,
            Some(_) => tally.losses += 1,
            None => tally.incomplete += 1,
        }

        info!(
            game = game + 1,
            games = config.games,
            first = first.name(),
            second = second.name(),
            side = %first_side,
            result = ?record.result,
            wins = tally.wins,
            losses = tally.losses,
            draws = tally.draws,
            "game finished"
        );
    }

    Ok(tally)
}
