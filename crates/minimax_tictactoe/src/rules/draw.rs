//! Terminal detection and scoring for tic-tac-toe.

use super::win::winner;
use crate::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// True iff the game is over: a line is completed or the board is full.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Score of a terminal board from X's perspective.
///
/// `1` if X has won, `-1` if O has won, `0` otherwise. Only meaningful on
/// terminal boards; a game still in progress also scores `0`.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Final outcome of the board, or `None` while the game continues.
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(player) => Some(Outcome::Winner(player)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}
