//! Minimax-backed player.

use super::Player;
use crate::board::Board;
use crate::error::PlayerError;
use crate::position::Position;
use crate::search::Minimax;
use crate::types::Mark;
use tracing::{debug, info};

/// AI that always plays the minimax-optimal move.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    name: String,
    search: Minimax,
}

impl AiPlayer {
    /// Creates an AI playing `mark`.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        let name = name.into();
        info!(ai = %name, %mark, "Creating AI player");
        Self {
            name,
            search: Minimax::new(mark),
        }
    }

    /// The mark this AI plays.
    pub fn mark(&self) -> Mark {
        self.search.own()
    }
}

impl Player for AiPlayer {
    fn get_move(&mut self, board: &Board) -> Result<Position, PlayerError> {
        debug!(ai = %self.name, "AI making move");
        let position = self.search.best_move(board).ok_or(PlayerError::NoLegalMoves)?;
        debug!(ai = %self.name, %position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
