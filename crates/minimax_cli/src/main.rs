//! Minimax tic-tac-toe - command-line driver

use anyhow::Result;
use clap::Parser;
use minimax_cli::{Cli, EngineConfig, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EngineConfig::load(cli.config.as_deref())?.with_tie_break(cli.tie_break);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(command = ?cli.command, "Starting minimax");
    let output = run(&cli, &config)?;
    println!("{}", output);

    Ok(())
}
