//! Game orchestration between players.

use crate::board::Board;
use crate::error::TurnError;
use crate::players::Player;
use crate::position::Position;
use crate::rules;
use crate::types::{GameStatus, Mark};
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A side is about to be asked for a move.
    TurnStarted {
        /// Side to move.
        mark: Mark,
        /// Name of the player for that side.
        player: String,
    },
    /// A move was applied.
    MoveMade {
        /// Side that moved.
        mark: Mark,
        /// Where it moved.
        position: Position,
    },
    /// Board after the latest move.
    BoardChanged(Board),
    /// The game reached a verdict.
    GameOver(GameStatus),
    /// A player could not supply a move; the game stops without a verdict.
    Abandoned {
        /// Side that failed to move.
        mark: Mark,
        /// Why no move was supplied.
        reason: String,
    },
}

/// Receives [`GameEvent`]s as the game progresses.
///
/// Observers cannot stop a game. A display that fails to write should log
/// the failure and keep going.
pub trait GameObserver {
    /// Handles one event.
    fn on_event(&mut self, event: &GameEvent);
}

impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for `Mark` to move.
    AwaitingMove(Mark),
    /// The game ended with a verdict.
    Finished(GameStatus),
    /// The given side could not move; no verdict.
    Abandoned(Mark),
}

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// Win or draw.
    Finished(GameStatus),
    /// Stopped without a result because a player could not move.
    Abandoned {
        /// Side that failed to move.
        mark: Mark,
        /// Why no move was supplied.
        reason: String,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    state: TurnState,
    abandon_reason: Option<String>,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh game with `first` to move.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, first: Mark) -> Self {
        Self::from_board(Board::new(), player_x, player_o, first)
    }

    /// Resumes from `board` with `to_move` to play.
    ///
    /// A board that is already won or drawn starts in [`TurnState::Finished`],
    /// so no player is ever asked to move on it.
    pub fn from_board(
        board: Board,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        to_move: Mark,
    ) -> Self {
        let status = rules::status(&board);
        let state = if status.is_terminal() {
            TurnState::Finished(status)
        } else {
            TurnState::AwaitingMove(to_move)
        };
        Self {
            board,
            player_x,
            player_o,
            state,
            abandon_reason: None,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    fn player_mut(&mut self, mark: Mark) -> &mut dyn Player {
        match mark {
            Mark::X => self.player_x.as_mut(),
            Mark::O => self.player_o.as_mut(),
        }
    }

    /// Performs one transition.
    ///
    /// Returns `Some(outcome)` once the game has ended, `None` while it
    /// continues.
    ///
    /// # Errors
    ///
    /// [`TurnError::IllegalMove`] if a player returns a move the board
    /// refuses.
    #[instrument(skip(self, observer), fields(state = ?self.state))]
    pub fn step(
        &mut self,
        observer: &mut dyn GameObserver,
    ) -> Result<Option<GameOutcome>, TurnError> {
        let mark = match self.state {
            TurnState::AwaitingMove(mark) => mark,
            TurnState::Finished(status) => return Ok(Some(GameOutcome::Finished(status))),
            TurnState::Abandoned(mark) => {
                return Ok(Some(GameOutcome::Abandoned {
                    mark,
                    reason: self.abandon_reason.clone().unwrap_or_default(),
                }));
            }
        };

        let board = self.board;
        let player = self.player_mut(mark);
        let name = player.name().to_string();
        observer.on_event(&GameEvent::TurnStarted {
            mark,
            player: name.clone(),
        });

        debug!(player = %name, %mark, "Waiting for move");
        let position = match player.get_move(&board) {
            Ok(position) => position,
            Err(err) => {
                let reason = err.to_string();
                warn!(player = %name, %mark, %reason, "Player could not move, abandoning game");
                self.state = TurnState::Abandoned(mark);
                self.abandon_reason = Some(reason.clone());
                observer.on_event(&GameEvent::Abandoned {
                    mark,
                    reason: reason.clone(),
                });
                return Ok(Some(GameOutcome::Abandoned { mark, reason }));
            }
        };

        self.board = self
            .board
            .place(position, mark)
            .map_err(|source| TurnError::IllegalMove {
                player: name.clone(),
                mark,
                source,
            })?;
        info!(player = %name, %mark, %position, "Move made");
        observer.on_event(&GameEvent::MoveMade { mark, position });
        observer.on_event(&GameEvent::BoardChanged(self.board));

        let status = rules::status(&self.board);
        if !status.is_terminal() {
            self.state = TurnState::AwaitingMove(mark.opponent());
            return Ok(None);
        }
        info!(?status, "Game over");
        self.state = TurnState::Finished(status);
        observer.on_event(&GameEvent::GameOver(status));
        Ok(Some(GameOutcome::Finished(status)))
    }

    /// Runs the game loop until it finishes or is abandoned.
    ///
    /// # Errors
    ///
    /// See [`Orchestrator::step`].
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> Result<GameOutcome, TurnError> {
        info!("Starting game orchestration");
        loop {
            if let Some(outcome) = self.step(observer)? {
                return Ok(outcome);
            }
        }
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("board", &self.board)
            .field("player_x", &self.player_x.name())
            .field("player_o", &self.player_o.name())
            .field("state", &self.state)
            .field("abandon_reason", &self.abandon_reason)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayerError;
    use crate::players::AiPlayer;
    use std::collections::VecDeque;

    /// Plays a fixed list of moves, then reports closed input.
    struct Scripted {
        moves: VecDeque<Position>,
    }

    impl Scripted {
        fn boxed(moves: &[u8]) -> Box<dyn Player> {
            Box::new(Self {
                moves: moves
                    .iter()
                    .map(|n| Position::from_number(i64::from(*n)).unwrap())
                    .collect(),
            })
        }
    }

    impl Player for Scripted {
        fn get_move(&mut self, _board: &Board) -> Result<Position, PlayerError> {
            self.moves.pop_front().ok_or(PlayerError::InputClosed)
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_ai_vs_ai_draws() {
        let mut game = Orchestrator::new(
            Box::new(AiPlayer::new("AI X", Mark::X)),
            Box::new(AiPlayer::new("AI O", Mark::O)),
            Mark::X,
        );
        let mut events: Vec<GameEvent> = Vec::new();
        let outcome = game.run(&mut events).unwrap();
        assert_eq!(outcome, GameOutcome::Finished(GameStatus::Draw));
        assert_eq!(game.state(), TurnState::Finished(GameStatus::Draw));
        assert!(game.board().is_full());
        assert_eq!(events.last(), Some(&GameEvent::GameOver(GameStatus::Draw)));
    }

    #[test]
    fn test_scripted_win_and_events() {
        // X: 1 2 3 wins the top row; O: 4 5.
        let mut game = Orchestrator::new(
            Scripted::boxed(&[1, 2, 3]),
            Scripted::boxed(&[4, 5]),
            Mark::X,
        );
        let mut events: Vec<GameEvent> = Vec::new();
        let outcome = game.run(&mut events).unwrap();
        assert_eq!(outcome, GameOutcome::Finished(GameStatus::Won(Mark::X)));

        let moves: Vec<(Mark, u8)> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::MoveMade { mark, position } => Some((*mark, position.number())),
                _ => None,
            })
            .collect();
        assert_eq!(
            moves,
            vec![(Mark::X, 1), (Mark::O, 4), (Mark::X, 2), (Mark::O, 5), (Mark::X, 3)]
        );
        assert_eq!(
            events[0],
            GameEvent::TurnStarted {
                mark: Mark::X,
                player: "Scripted".to_string()
            }
        );
    }

    #[test]
    fn test_o_can_move_first() {
        let mut game = Orchestrator::new(
            Scripted::boxed(&[4, 5]),
            Scripted::boxed(&[1, 2, 3]),
            Mark::O,
        );
        let outcome = game.run(&mut Vec::<GameEvent>::new()).unwrap();
        assert_eq!(outcome, GameOutcome::Finished(GameStatus::Won(Mark::O)));
    }

    #[test]
    fn test_exhausted_input_abandons() {
        let mut game = Orchestrator::new(
            Scripted::boxed(&[1]),
            Scripted::boxed(&[]),
            Mark::X,
        );
        let mut events: Vec<GameEvent> = Vec::new();
        let outcome = game.run(&mut events).unwrap();
        assert_eq!(
            outcome,
            GameOutcome::Abandoned {
                mark: Mark::O,
                reason: PlayerError::InputClosed.to_string(),
            }
        );
        assert_eq!(game.state(), TurnState::Abandoned(Mark::O));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::GameOver(_))));

        // Further steps report the same abandonment, reason included.
        assert_eq!(game.step(&mut events).unwrap(), Some(outcome));
    }

    #[test]
    fn test_illegal_move_is_fatal() {
        let mut game = Orchestrator::new(
            Scripted::boxed(&[5]),
            Scripted::boxed(&[5]),
            Mark::X,
        );
        let err = game.run(&mut Vec::<GameEvent>::new()).unwrap_err();
        assert!(matches!(err, TurnError::IllegalMove { mark: Mark::O, .. }));
    }

    #[test]
    fn test_terminal_board_never_asks_for_moves() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let mut game = Orchestrator::from_board(
            board,
            Scripted::boxed(&[]),
            Scripted::boxed(&[]),
            Mark::O,
        );
        let mut events: Vec<GameEvent> = Vec::new();
        assert_eq!(
            game.run(&mut events).unwrap(),
            GameOutcome::Finished(GameStatus::Won(Mark::X))
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_ai_finishes_from_midgame() {
        // O to move must block at 3; AI O against scripted X.
        let board: Board = "XX. .O. ...".parse().unwrap();
        let mut game = Orchestrator::from_board(
            board,
            Scripted::boxed(&[]),
            Box::new(AiPlayer::new("AI O", Mark::O)),
            Mark::O,
        );
        let mut events: Vec<GameEvent> = Vec::new();
        assert!(game.step(&mut events).unwrap().is_none());
        assert!(events.contains(&GameEvent::MoveMade {
            mark: Mark::O,
            position: Position::TopRight
        }));
        assert_eq!(game.state(), TurnState::AwaitingMove(Mark::X));
    }
}
