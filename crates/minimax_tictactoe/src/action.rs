//! Actions and move errors for tic-tac-toe.
//!
//! An action names a square by `(row, col)`. It carries no player: the
//! mover is always inferred from the board the action is applied to.

use crate::types::SIZE;
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate, 0-based from the top-left corner.
///
/// Actions order row-major, so sorted collections of actions iterate
/// top-left to bottom-right. An action may point off the board; such
/// actions are rejected when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major board index, or `None` if the action is off the board.
    pub fn index(&self) -> Option<usize> {
        (self.row < SIZE && self.col < SIZE).then_some(self.row * SIZE + self.col)
    }

    /// Every on-board action in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Action::new(row, col)))
    }

    /// True for the four corner squares.
    pub fn is_corner(&self) -> bool {
        (self.row == 0 || self.row == SIZE - 1) && (self.col == 0 || self.col == SIZE - 1)
    }

    /// True for the centre square.
    pub fn is_center(&self) -> bool {
        self.row == SIZE / 2 && self.col == SIZE / 2
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that can occur when querying or advancing a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the action is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Action),

    /// The action points outside the 3x3 grid.
    #[display("Square {} is off the board", _0)]
    OutOfBounds(Action),

    /// The board is terminal; there is no mover and no legal action.
    #[display("Game is already over")]
    GameOver,
}

impl MoveError {
    /// True for errors caused by the action itself rather than the board.
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, MoveError::SquareOccupied(_) | MoveError::OutOfBounds(_))
    }
}

impl std::error::Error for MoveError {}
