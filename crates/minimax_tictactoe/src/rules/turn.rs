//! Turn inference and board transitions.
//!
//! The mover is never stored: it is derived from the marks on the board,
//! so any board value fully describes whose turn it is.

use super::draw::terminal;
use crate::invariants::{Invariant, MarkBalance};
use crate::{Action, Board, MoveError, Player, Square};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// Returns the player who moves next on `board`.
///
/// X moves unless X has strictly more marks than O. The empty board is
/// always X's turn.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] if the board is terminal.
#[instrument(level = "debug", skip(board), ret)]
pub fn player(board: &Board) -> Result<Player, MoveError> {
    if terminal(board) {
        return Err(MoveError::GameOver);
    }
    Ok(next_mover(board))
}

/// Returns every empty square of a non-terminal board.
///
/// The set iterates row-major; callers should treat it as unordered.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] if the board is terminal.
#[instrument(level = "debug", skip(board))]
pub fn actions(board: &Board) -> Result<BTreeSet<Action>, MoveError> {
    if terminal(board) {
        return Err(MoveError::GameOver);
    }
    Ok(empty_squares(board).collect())
}

/// Returns the board that results from the mover playing `action`.
///
/// The mover is inferred from the input board. The input is never
/// modified; a fresh board is returned.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if `action` is off the grid.
/// - [`MoveError::SquareOccupied`] if the square already holds a mark.
/// - [`MoveError::GameOver`] if the board is terminal.
#[instrument(level = "debug", skip(board))]
pub fn result(board: &Board, action: Action) -> Result<Board, MoveError> {
    match board.get(action) {
        None => return Err(MoveError::OutOfBounds(action)),
        Some(Square::Occupied(_)) => return Err(MoveError::SquareOccupied(action)),
        Some(Square::Empty) => {}
    }

    let mover = player(board)?;
    let next = apply(board, action, mover);

    if !MarkBalance::holds(&next) {
        warn!(
            x = next.count(Player::X),
            o = next.count(Player::O),
            "{}",
            MarkBalance::description()
        );
    }
    debug_assert!(
        !MarkBalance::holds(board) || MarkBalance::holds(&next),
        "transition broke mark balance"
    );

    Ok(next)
}

/// Counting rule behind [`player`], without the terminal check.
pub(crate) fn next_mover(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Empty squares in row-major order, without the terminal check.
pub(crate) fn empty_squares(board: &Board) -> impl Iterator<Item = Action> + '_ {
    Action::all().filter(|&action| board.is_empty(action))
}

/// Writes `mover`'s mark at an already validated `action`.
pub(crate) fn apply(board: &Board, action: Action, mover: Player) -> Board {
    board.with(action, Square::Occupied(mover))
}
