//! Tic-tac-toe game engine with exhaustive minimax search.
//!
//! The engine is a set of pure functions over an immutable [`Board`]
//! value. A driver (CLI, UI, test harness) holds the board and loops:
//!
//! 1. ask [`player`] who moves,
//! 2. pick an [`Action`], from input or from [`minimax`],
//! 3. apply it with [`result`] to get a new board,
//! 4. stop once [`terminal`] is true and report [`winner`] / [`utility`].
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     let action = minimax(&board)?;
//!     board = result(&board, action)?;
//! }
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), minimax_tictactoe::MoveError>(())
//! ```
//!
//! # Errors
//!
//! Queries that need a mover ([`player`], [`actions`], [`result`],
//! [`minimax`]) return [`MoveError::GameOver`] on terminal boards instead
//! of inventing a player.

#![warn(missing_docs)]

mod action;
pub mod invariants;
pub mod rules;
mod search;
mod types;

pub use action::{Action, MoveError};
pub use invariants::{BoardInvariants, Invariant, InvariantSet, InvariantViolation};
pub use rules::{
    LINES, Outcome, actions, is_full, outcome, player, result, terminal, utility, winner,
};
pub use search::{
    ScoredAction, TieBreak, evaluate, max_value, min_value, minimax, minimax_with,
    optimal_actions,
};
pub use types::{Board, BoardParseError, CELLS, Player, SIZE, Square};

/// Returns the starting board: every square empty.
pub fn initial_state() -> Board {
    Board::new()
}
