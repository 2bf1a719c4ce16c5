//! ttt - tic-tac-toe against an unbeatable AI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ttt_console::cli::{Cli, Command, PlayArgs};
use ttt_console::{GameConfig, analyze, run_session};
use ttt_engine::{Board, Mark, shared_input};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command.unwrap_or_default() {
        Command::Play(args) => run_play(args),
        Command::BestMove { board, mark } => run_best_move(board, mark),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run interactive games on stdin/stdout
#[instrument(skip_all)]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => GameConfig::default(),
    }
    .with_overrides(args.player_x, args.player_o, args.first);
    info!(?config, "Starting session");

    let input = shared_input(io::stdin().lock());
    let outcomes = run_session(&config, input, io::stdout, args.once)?;
    info!(games = outcomes.len(), "Session finished");
    Ok(())
}

/// Print the analysis of one position
fn run_best_move(board: Board, mark: Option<Mark>) -> Result<()> {
    print!("{}", analyze(&board, mark)?);
    Ok(())
}
