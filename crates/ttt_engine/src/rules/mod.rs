//! Game rules for tic-tac-toe.
//!
//! Pure functions that derive the status of a board. Nothing here is cached:
//! status is always recomputed from the board itself.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use crate::board::Board;
use crate::types::GameStatus;

/// Computes the status of `board`.
///
/// A winning line always takes precedence over a full board.
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
