//! Command-line interface for ttt.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use ttt_engine::{Board, Mark, PlayerKind};

/// Tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Tic-tac-toe in the terminal with an unbeatable AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log filter used when RUST_LOG is not set ("off", "error", "warn", "info", "debug", "trace")
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive games
    Play(PlayArgs),

    /// Print minimax scores and the best move for a position
    BestMove {
        /// Board as nine cells, e.g. "XX.OO...." (X/O for marks; '.', '-', '_' or the digit for empty)
        board: Board,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(short, long)]
        mark: Option<Mark>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}

/// Options for `play`
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Path to a TOML game configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who plays X: human or ai (asked interactively if not configured)
    #[arg(short = 'x', long)]
    pub player_x: Option<PlayerKind>,

    /// Who plays O: human or ai (asked interactively if not configured)
    #[arg(short = 'o', long)]
    pub player_o: Option<PlayerKind>,

    /// Which mark moves first
    #[arg(short, long)]
    pub first: Option<Mark>,

    /// Play a single game without asking to play again
    #[arg(long)]
    pub once: bool,
}
