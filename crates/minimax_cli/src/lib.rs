//! Command-line driver for the minimax tic-tac-toe engine.
//!
//! The binary parses a board, runs one command against the engine and
//! prints a report. All game logic lives in `minimax_tictactoe`.

#![warn(missing_docs)]

mod cli;
mod commands;
mod config;

pub use cli::{Cli, Command};
pub use commands::{
    Analysis, BestMove, SelfPlay, Turn, analyze, best_move, render, self_play, validate_board,
};
pub use config::{ConfigError, EngineConfig};

use minimax_tictactoe::Board;
use tracing::instrument;

/// Runs a parsed command line and returns the text to print.
#[instrument(skip(cli, config), fields(tie_break = %config.tie_break()))]
pub fn run(cli: &Cli, config: &EngineConfig) -> anyhow::Result<String> {
    let tie_break = *config.tie_break();
    match &cli.command {
        Command::BestMove { board } => render(&best_move(board, tie_break)?, cli.json),
        Command::Analyze { board } => render(&analyze(board)?, cli.json),
        Command::SelfPlay { board } => {
            let start = board.unwrap_or_else(Board::new);
            render(&self_play(&start, tie_break)?, cli.json)
        }
    }
}
