//! Player trait and implementations.
//!
//! A [`Player`] is a move source: given the current board it either
//! produces a legal position or reports that it cannot. There are exactly
//! two implementations, chosen once when a game is set up.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::{HumanPlayer, SharedInput, parse_move, shared_input};

use crate::board::Board;
use crate::error::PlayerError;
use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::instrument;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player for the given board.
    ///
    /// # Errors
    ///
    /// Returns a [`PlayerError`] when no move can be supplied, for example
    /// because the input stream is closed.
    fn get_move(&mut self, board: &Board) -> Result<Position, PlayerError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Which implementation drives a side.
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
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves typed by a person.
    Human,
    /// Moves chosen by minimax.
    Ai,
}

/// Creates the player for `mark`.
///
/// Human players read from the shared `input` and write prompts to `output`.
#[instrument(skip(input, output))]
pub fn create<R, W>(
    kind: PlayerKind,
    mark: Mark,
    input: &SharedInput<R>,
    output: W,
) -> Box<dyn Player>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(
            format!("Player {mark}"),
            input.clone(),
            output,
        )),
        PlayerKind::Ai => Box::new(AiPlayer::new(format!("AI {mark}"), mark)),
    }
}
