//! Core domain types for tic-tac-toe.

use crate::action::Action;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of squares on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A board is a plain value: it is `Copy`, compares cell by cell, and is
/// never mutated by the engine. Transitions build a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Builds a board from three rows of squares.
    pub fn from_rows(rows: [[Square; SIZE]; SIZE]) -> Self {
        let mut squares = [Square::Empty; CELLS];
        for (row, cells) in rows.iter().enumerate() {
            squares[row * SIZE..(row + 1) * SIZE].copy_from_slice(cells);
        }
        Self { squares }
    }

    /// Gets the square addressed by `action`, or `None` if it is off the board.
    pub fn get(&self, action: Action) -> Option<Square> {
        action.index().map(|idx| self.squares[idx])
    }

    /// Checks if the addressed square exists and is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Counts the squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&sq| sq == Square::Occupied(player))
            .count()
    }

    /// Counts the empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|&&sq| sq == Square::Empty).count()
    }

    /// Returns a copy of this board with `square` written at `action`.
    ///
    /// The caller has already validated the address.
    pub(crate) fn with(mut self, action: Action, square: Square) -> Self {
        if let Some(idx) = action.index() {
            self.squares[idx] = square;
        }
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                write!(f, "{}", self.squares[row * SIZE + col].symbol())?;
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error raised when a board cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is not a cell symbol or separator.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),

    /// The text did not contain exactly nine cells.
    #[display("Expected {} cells, found {}", CELLS, _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X` and `O` (either case) are marks; `.`, `_` and `-` are empty.
    /// Whitespace, `/` and `|` are separators and ignored, so both
    /// `"XO./.X./..O"` and the output of `Display` parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);
        for line in s.lines() {
            // Display's row divider
            if line.trim() == "-+-+-" {
                continue;
            }
            for ch in line.chars() {
                let square = match ch {
                    'X' | 'x' => Square::Occupied(Player::X),
                    'O' | 'o' => Square::Occupied(Player::O),
                    '.' | '_' | '-' => Square::Empty,
                    '/' | '|' => continue,
                    c if c.is_whitespace() => continue,
                    c => return Err(BoardParseError::InvalidCell(c)),
                };
                cells.push(square);
            }
        }

        let squares: [Square; CELLS] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardParseError::WrongCellCount(cells.len()))?;
        Ok(Self { squares })
    }
}
