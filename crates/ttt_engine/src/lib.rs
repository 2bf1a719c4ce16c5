//! Tic-tac-toe engine with a perfect minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: `Copy` value type for the 3x3 grid, cells numbered 1-9
//! - **Rules**: pure win/draw detection, status recomputed on demand
//! - **Search**: exhaustive minimax with depth-adjusted scores
//! - **Players**: move sources, either a human reading lines or the AI
//! - **Orchestrator**: alternates the two players until a verdict
//!
//! # Example
//!
//! ```
//! use ttt_engine::{AiPlayer, GameEvent, GameOutcome, GameStatus, Mark, Orchestrator};
//!
//! let mut game = Orchestrator::new(
//!     Box::new(AiPlayer::new("AI X", Mark::X)),
//!     Box::new(AiPlayer::new("AI O", Mark::O)),
//!     Mark::X,
//! );
//! let outcome = game.run(&mut Vec::<GameEvent>::new()).unwrap();
//! assert_eq!(outcome, GameOutcome::Finished(GameStatus::Draw));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod orchestrator;
mod position;
mod search;
mod types;

pub mod players;
pub mod rules;

pub use board::Board;
pub use error::{BoardParseError, InputError, MoveError, PlayerError, TurnError};
pub use orchestrator::{GameEvent, GameObserver, GameOutcome, Orchestrator, TurnState};
pub use players::{AiPlayer, HumanPlayer, Player, PlayerKind, SharedInput, parse_move, shared_input};
pub use position::Position;
pub use search::{Minimax, WIN_SCORE};
pub use types::{GameStatus, Mark, Square};
