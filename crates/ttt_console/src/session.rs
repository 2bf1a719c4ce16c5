//! Interactive session: player selection, games, and the play-again loop.

use crate::config::GameConfig;
use crate::console::Console;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, instrument};
use ttt_engine::{GameOutcome, Mark, Orchestrator, PlayerKind, SharedInput, players};

/// Runs games until the user declines another, input runs out, or a
/// single game was requested with `once`.
///
/// `writer` produces a handle to the terminal output; the console and every
/// human player get their own handle to it.
///
/// Returns the outcome of every game played.
#[instrument(skip(input, writer))]
pub fn run_session<R, W, F>(
    config: &GameConfig,
    input: SharedInput<R>,
    writer: F,
    once: bool,
) -> Result<Vec<GameOutcome>>
where
    R: BufRead + 'static,
    W: Write + 'static,
    F: Fn() -> W,
{
    let mut console = Console::new(input.clone(), writer());
    let mut outcomes = Vec::new();

    loop {
        console.newline()?;
        let Some(player_x) = choose_kind(&mut console, config, Mark::X)? else {
            break;
        };
        let Some(player_o) = choose_kind(&mut console, config, Mark::O)? else {
            break;
        };
        console.newline()?;

        info!(%player_x, %player_o, first = %config.first(), "Starting game");
        let mut game = Orchestrator::new(
            players::create(player_x, Mark::X, &input, writer()),
            players::create(player_o, Mark::O, &input, writer()),
            *config.first(),
        );

        console.welcome()?;
        console.show_board(game.board())?;
        let outcome = game.run(&mut console).context("Game aborted")?;
        info!(?outcome, "Game ended");

        let abandoned = matches!(outcome, GameOutcome::Abandoned { .. });
        outcomes.push(outcome);
        if abandoned || once || !console.play_again()? {
            break;
        }
    }

    if let Some(last) = outcomes.last() {
        console.show_outcome(last)?;
    }
    console.goodbye()?;
    Ok(outcomes)
}

/// Configured kind for `mark`, or the user's menu choice.
fn choose_kind<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    mark: Mark,
) -> Result<Option<PlayerKind>> {
    match config.player(mark) {
        Some(kind) => Ok(Some(kind)),
        None => Ok(console.select_player_kind(mark)?),
    }
}
