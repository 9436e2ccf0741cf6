//! Command-line interface for the minimax driver.

use clap::{Parser, Subcommand};
use minimax_tictactoe::{Board, TieBreak};
use std::path::PathBuf;

/// Minimax tic-tac-toe - optimal moves by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "minimax")]
#[command(about = "Optimal tic-tac-toe moves by exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Rule for choosing among equally good moves (first, last)
    #[arg(long, global = true)]
    pub tie_break: Option<TieBreak>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.` for empty.
/// `/`, `|` and whitespace are ignored, e.g. `"X.O/.X./..O"`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the player to move
    BestMove {
        /// Board to search
        #[arg(short, long)]
        board: Board,
    },

    /// Print the minimax value of every legal move
    Analyze {
        /// Board to search
        #[arg(short, long)]
        board: Board,
    },

    /// Let minimax play both sides until the game ends
    SelfPlay {
        /// Starting board (empty if omitted)
        #[arg(short, long)]
        board: Option<Board>,
    },
}
