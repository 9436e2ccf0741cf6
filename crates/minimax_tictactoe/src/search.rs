//! Exhaustive minimax search.
//!
//! X maximizes [`utility`], O minimizes it. Every line of play is searched
//! to a terminal board: no pruning, no depth limit, no discounting. The
//! recursion depth is bounded by the number of empty squares.

use crate::rules::turn::{apply, empty_squares, next_mover};
use crate::rules::{player, terminal, utility};
use crate::{Action, Board, MoveError, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Rule for choosing among equally valued actions.
///
/// Candidates are always listed row-major, so both rules are
/// deterministic. Callers should only rely on the chosen action being
/// optimal, not on which optimal action it is.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TieBreak {
    /// First optimal action in row-major order.
    #[default]
    First,
    /// Last optimal action in row-major order.
    Last,
}

impl TieBreak {
    /// Picks one action from a row-major candidate list.
    pub fn pick(self, candidates: &[Action]) -> Option<Action> {
        match self {
            TieBreak::First => candidates.first().copied(),
            TieBreak::Last => candidates.last().copied(),
        }
    }
}

/// A legal action together with its minimax value (X's perspective).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAction {
    /// The action.
    pub action: Action,
    /// Value of the board after the action, under optimal play.
    pub value: i32,
}

/// Returns an optimal action for the player to move.
///
/// Ties are broken with [`TieBreak::First`].
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] if the board is terminal.
pub fn minimax(board: &Board) -> Result<Action, MoveError> {
    minimax_with(board, TieBreak::default())
}

/// Returns an optimal action, breaking ties with `tie_break`.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] if the board is terminal.
#[instrument(level = "debug", skip(board))]
pub fn minimax_with(board: &Board, tie_break: TieBreak) -> Result<Action, MoveError> {
    let candidates = optimal_actions(board)?;
    let action = tie_break.pick(&candidates).ok_or(MoveError::GameOver)?;
    debug!(%action, candidates = candidates.len(), "Minimax chose action");
    Ok(action)
}

/// Returns every action that achieves the optimal value, row-major.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] if the board is terminal.
pub fn optimal_actions(board: &Board) -> Result<Vec<Action>, MoveError> {
    let mover = player(board)?;
    let scored = evaluate(board)?;

    let values = scored.iter().map(|s| s.value);
    let best = match mover {
        Player::X => values.max(),
        Player::O => values.min(),
    };

    Ok(scored
        .iter()
        .filter(|s| Some(s.value) == best)
        .map(|s| s.action)
        .collect())
}

/// Scores every legal action of a non-terminal board, row-major.
///
/// Each value is what the resulting board is worth to X when both players
/// play optimally from there.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] if the board is terminal.
#[instrument(level = "debug", skip(board))]
pub fn evaluate(board: &Board) -> Result<Vec<ScoredAction>, MoveError> {
    let mover = player(board)?;

    let scored: Vec<_> = empty_squares(board)
        .map(|action| {
            let next = apply(board, action, mover);
            let value = match mover {
                Player::X => min_value(&next),
                Player::O => max_value(&next),
            };
            ScoredAction { action, value }
        })
        .collect();

    debug!(?mover, actions = scored.len(), "Evaluated board");
    Ok(scored)
}

/// Value of `board` when the maximizing player (X) is to move.
///
/// Terminal boards score their [`utility`].
pub fn max_value(board: &Board) -> i32 {
    if terminal(board) {
        return utility(board);
    }

    let mover = next_mover(board);
    empty_squares(board)
        .map(|action| min_value(&apply(board, action, mover)))
        .fold(i32::MIN, i32::max)
}

/// Value of `board` when the minimizing player (O) is to move.
///
/// Terminal boards score their [`utility`].
pub fn min_value(board: &Board) -> i32 {
    if terminal(board) {
        return utility(board);
    }

    let mover = next_mover(board);
    empty_squares(board)
        .map(|action| max_value(&apply(board, action, mover)))
        .fold(i32::MAX, i32::min)
}
