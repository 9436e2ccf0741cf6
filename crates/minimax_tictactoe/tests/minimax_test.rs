//! Tests for optimal play.

use minimax_tictactoe::{
    Action, Board, Outcome, Player, TieBreak, initial_state, minimax, minimax_with,
    optimal_actions, outcome, player, result, terminal, utility,
};
use strum::IntoEnumIterator;

/// Plays `minimax` for both sides until the game ends.
fn self_play(mut board: Board, tie_break: TieBreak) -> Board {
    while !terminal(&board) {
        let action = minimax_with(&board, tie_break).expect("non-terminal board has a move");
        board = result(&board, action).expect("minimax returns a legal action");
    }
    board
}

#[test]
fn test_self_play_is_a_draw() {
    let board = self_play(initial_state(), TieBreak::First);
    assert_eq!(utility(&board), 0);
    assert_eq!(outcome(&board), Some(Outcome::Draw));
}

#[test]
fn test_self_play_is_a_draw_for_every_tie_break() {
    for tie_break in TieBreak::iter() {
        let board = self_play(initial_state(), tie_break);
        assert_eq!(utility(&board), 0, "tie break {tie_break} lost a game");
    }
}

#[test]
fn test_first_move_is_corner_or_center() {
    for tie_break in TieBreak::iter() {
        let action = minimax_with(&initial_state(), tie_break).unwrap();
        assert!(
            action.is_corner() || action.is_center(),
            "unexpected opening {action}"
        );
    }
    assert_eq!(minimax(&initial_state()), Ok(Action::new(0, 0)));
}

#[test]
fn test_first_move_does_not_lose() {
    let opening = result(&initial_state(), minimax(&initial_state()).unwrap()).unwrap();
    let board = self_play(opening, TieBreak::First);
    assert!(utility(&board) >= 0);
}

#[test]
fn test_every_opening_draws_under_optimal_play() {
    for opening in Action::all() {
        let board = result(&initial_state(), opening).unwrap();
        let end = self_play(board, TieBreak::First);
        assert_eq!(utility(&end), 0, "opening {opening} did not draw");
    }
}

#[test]
fn test_x_punishes_o_mistake() {
    // X opened in the centre, O answered on an edge (a losing reply);
    // X to move must keep the forced win.
    let board = [Action::new(1, 1), Action::new(0, 1)]
        .into_iter()
        .try_fold(initial_state(), |board, action| result(&board, action))
        .unwrap();
    assert_eq!(player(&board), Ok(Player::X));

    let end = self_play(board, TieBreak::First);
    assert_eq!(utility(&end), 1);
}

#[test]
fn test_optimal_reply_to_center_is_a_corner() {
    let board = result(&initial_state(), Action::new(1, 1)).unwrap();
    let candidates = optimal_actions(&board).unwrap();
    assert_eq!(candidates.len(), 4);
    assert!(candidates.iter().all(Action::is_corner));
}
