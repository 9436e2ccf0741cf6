//! Command implementations.
//!
//! Each command builds a serializable report. Reports render as plain
//! text through `Display` or as JSON through `serde_json`.

use anyhow::{Result, bail};
use minimax_tictactoe::{
    Action, Board, BoardInvariants, InvariantSet, Outcome, Player, ScoredAction, TieBreak,
    evaluate, minimax_with, optimal_actions, outcome, player, result, terminal, utility,
};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, instrument};

/// Rejects boards that legal play cannot reach.
#[instrument(skip(board))]
pub fn validate_board(board: &Board) -> Result<()> {
    if let Err(violations) = BoardInvariants::check_all(board) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Unreachable board: {}", descriptions);
    }
    Ok(())
}

/// The optimal move for one board.
#[derive(Debug, Clone, Serialize)]
pub struct BestMove {
    /// Player to move.
    pub player: Player,
    /// Chosen action.
    pub action: Action,
    /// Board after the action.
    pub board: Board,
}

/// Finds the optimal move for the player to move.
#[instrument(skip(board))]
pub fn best_move(board: &Board, tie_break: TieBreak) -> Result<BestMove> {
    validate_board(board)?;
    let mover = player(board)?;
    let action = minimax_with(board, tie_break)?;
    let next = result(board, action)?;
    info!(player = %mover, %action, "Best move found");
    Ok(BestMove {
        player: mover,
        action,
        board: next,
    })
}

impl fmt::Display for BestMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player {} plays {}", self.player, self.action)?;
        write!(f, "{}", self.board)
    }
}

/// Minimax values of every legal move on one board.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Player to move.
    pub player: Player,
    /// Value of each legal action, row-major.
    pub scores: Vec<ScoredAction>,
    /// Actions achieving the optimal value, row-major.
    pub optimal: Vec<Action>,
}

/// Scores every legal move.
#[instrument(skip(board))]
pub fn analyze(board: &Board) -> Result<Analysis> {
    validate_board(board)?;
    let mover = player(board)?;
    let scores = evaluate(board)?;
    let optimal = optimal_actions(board)?;
    debug!(optimal = optimal.len(), "Analysis complete");
    Ok(Analysis {
        player: mover,
        scores,
        optimal,
    })
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} to move", self.player)?;
        for scored in &self.scores {
            let marker = if self.optimal.contains(&scored.action) {
                " *"
            } else {
                ""
            };
            write!(f, "\n{} {:>2}{}", scored.action, scored.value, marker)?;
        }
        Ok(())
    }
}

/// One move of a self-play game.
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    /// Player who moved.
    pub player: Player,
    /// Action played.
    pub action: Action,
    /// Board after the action.
    pub board: Board,
}

/// A complete self-play game.
#[derive(Debug, Clone, Serialize)]
pub struct SelfPlay {
    /// Starting board.
    pub start: Board,
    /// Moves in order.
    pub turns: Vec<Turn>,
    /// Final result.
    pub outcome: Outcome,
    /// Final score from X's perspective.
    pub utility: i32,
}

/// Plays minimax against itself from `start` until the game ends.
#[instrument(skip(start))]
pub fn self_play(start: &Board, tie_break: TieBreak) -> Result<SelfPlay> {
    validate_board(start)?;

    let mut board = *start;
    let mut turns = Vec::new();
    while !terminal(&board) {
        let mover = player(&board)?;
        let action = minimax_with(&board, tie_break)?;
        board = result(&board, action)?;
        debug!(player = %mover, %action, "Self-play move");
        turns.push(Turn {
            player: mover,
            action,
            board,
        });
    }

    let Some(final_outcome) = outcome(&board) else {
        bail!("Self-play stopped on a non-terminal board");
    };
    info!(outcome = %final_outcome, moves = turns.len(), "Self-play finished");
    Ok(SelfPlay {
        start: *start,
        turns,
        outcome: final_outcome,
        utility: utility(&board),
    })
}

impl fmt::Display for SelfPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        for turn in &self.turns {
            write!(f, "\n\nPlayer {} plays {}\n{}", turn.player, turn.action, turn.board)?;
        }
        write!(f, "\n\n{} (utility {})", self.outcome, self.utility)
    }
}

/// Renders a report as text or pretty JSON.
pub fn render<T: Serialize + fmt::Display>(report: &T, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_string())
    }
}
