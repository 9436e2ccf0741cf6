//! Win detection logic for tic-tac-toe.

use crate::{Action, Board, Player, Square};

const fn at(row: usize, col: usize) -> Action {
    Action { row, col }
}

/// The eight winning lines in scan order: rows top to bottom, columns
/// left to right, main diagonal, anti-diagonal.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark on the first completed line in [`LINES`] order, or
/// `None` if no line is completed. On a legally reached board at most one
/// player can own a completed line.
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if let Some(Square::Occupied(player)) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_rows([[X, O, X], [E, O, X], [E, O, E]]);
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::from_rows([[O, X, X], [E, O, E], [X, E, O]]);
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_rows([[O, O, X], [E, X, E], [X, E, E]]);
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_scan_order_picks_first_line() {
        // Unreachable boards with two completed lines.
        let board = Board::from_rows([[O, O, O], [X, X, X], [E, E, E]]);
        assert_eq!(winner(&board), Some(Player::O));

        let board = Board::from_rows([[X, X, X], [O, O, O], [E, E, E]]);
        assert_eq!(winner(&board), Some(Player::X));

        let board = Board::from_rows([[O, E, X], [O, E, X], [O, E, X]]);
        assert_eq!(winner(&board), Some(Player::O));
    }
}
