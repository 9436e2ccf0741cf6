//! Reachability invariants for tic-tac-toe boards.
//!
//! Any board reached from the empty board by legal play satisfies these.
//! Boards built by hand (or parsed from text) may not, and drivers check
//! them before searching.

use crate::rules::LINES;
use crate::{Board, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or one more"
    }
}

/// Invariant: completed lines never belong to both players.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let mut owners = LINES.iter().filter_map(|&[a, b, c]| {
            let sq = board.get(a);
            match sq {
                Some(Square::Occupied(player)) if sq == board.get(b) && sq == board.get(c) => {
                    Some(player)
                }
                _ => None,
            }
        });

        match owners.next() {
            Some(first) => owners.all(|p| p == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Completed lines belong to at most one player"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MarkBalance, SingleWinner);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, initial_state, result};

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_invariants_hold_for_empty_board() {
        assert!(BoardInvariants::check_all(&initial_state()).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut board = initial_state();
        for action in [Action::new(0, 0), Action::new(1, 1), Action::new(0, 2)] {
            board = result(&board, action).unwrap();
            assert!(BoardInvariants::check_all(&board).is_ok());
        }
    }

    #[test]
    fn test_mark_balance_detects_o_ahead() {
        let board = Board::from_rows([[O, E, E], [E, E, E], [E, E, E]]);
        assert!(!MarkBalance::holds(&board));
    }

    #[test]
    fn test_mark_balance_detects_x_two_ahead() {
        let board = Board::from_rows([[X, X, E], [E, E, E], [E, E, E]]);
        assert!(!MarkBalance::holds(&board));
    }

    #[test]
    fn test_single_winner_detects_two_winners() {
        let board = Board::from_rows([[X, X, X], [O, O, O], [E, E, E]]);
        assert!(MarkBalance::holds(&board));
        assert!(!SingleWinner::holds(&board));

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].to_string(), SingleWinner::description());
    }

    #[test]
    fn test_single_winner_allows_double_line_for_one_player() {
        let board = Board::from_rows([[X, X, X], [O, X, O], [X, O, O]]);
        assert!(SingleWinner::holds(&board));
    }

    #[test]
    fn test_all_violations_collected() {
        let board = Board::from_rows([[O, O, O], [X, X, X], [O, E, E]]);
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
