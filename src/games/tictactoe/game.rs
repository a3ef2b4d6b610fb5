//! Tic-tac-toe rules implementation.

use crate::core::{Action, Board, Mark, Player, SIZE};
use crate::error::{InvalidMoveError, Result};
use crate::rules::{ActionList, GameResult, RulesEngine};

/// The 8 winning lines as `(row, col)` triples, in check order:
/// rows top to bottom, columns left to right, main diagonal, anti-diagonal.
pub const WIN_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Tic-tac-toe rules engine.
///
/// Stateless: every method is a pure function of the board passed in.
///
/// ## Example
///
/// ```
/// use tictactoe_minimax::core::{Action, Player};
/// use tictactoe_minimax::games::tictactoe::TicTacToe;
/// use tictactoe_minimax::rules::RulesEngine;
///
/// let game = TicTacToe;
/// let board = game.initial_state();
/// assert_eq!(game.current_player(&board), Player::X);
///
/// let next = game.apply_action(&board, &Action::new(1, 1)).unwrap();
/// assert_eq!(game.current_player(&next), Player::O);
/// assert_eq!(game.legal_actions(&next).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TicTacToe;

impl RulesEngine for TicTacToe {
    type State = Board;
    type Action = Action;

    fn initial_state(&self) -> Board {
        Board::empty()
    }

    fn current_player(&self, board: &Board) -> Player {
        if board.count(Mark::X) == board.count(Mark::O) {
            Player::X
        } else {
            Player::O
        }
    }

    fn legal_actions(&self, board: &Board) -> ActionList<Action> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Action::new(row, col)))
            .filter(|&action| board.at(action) == Some(Mark::Empty))
            .collect()
    }

    fn apply_action(&self, board: &Board, action: &Action) -> Result<Board> {
        let Action { row, col } = *action;

        match board.get(row, col) {
            None => Err(InvalidMoveError::OutOfBounds { row, col }),
            Some(Mark::Empty) => {
                let mark = self.current_player(board).mark();
                Ok(board.with_mark(row, col, mark))
            }
            Some(mark) => Err(InvalidMoveError::Occupied { row, col, mark }),
        }
    }

    fn winner(&self, board: &Board) -> Option<Player> {
        WIN_LINES.iter().find_map(|&line| {
            let [a, b, c] = line.map(|(r, col)| board.get(r, col).unwrap_or(Mark::Empty));
            if a == b && b == c {
                a.player()
            } else {
                None
            }
        })
    }

    fn result(&self, board: &Board) -> Option<GameResult> {
        match self.winner(board) {
            Some(player) => Some(GameResult::Winner(player)),
            None if board.is_full() => Some(GameResult::Draw),
            None => None,
        }
    }
}
