//! Terminal front-end for the tic-tac-toe engine.
//!
//! - **Config**: TOML game configuration with CLI overrides
//! - **Console**: board rendering, menus, and game messages
//! - **Session**: player selection and the play-again loop
//! - **Analysis**: minimax scores for a single position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod config;
mod console;
mod session;

pub mod cli;

pub use analysis::{analyze, infer_to_move};
pub use config::{ConfigError, GameConfig};
pub use console::{Console, MenuError, parse_play_again, parse_player_kind};
pub use session::run_session;
