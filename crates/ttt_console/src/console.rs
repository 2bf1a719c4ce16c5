//! Console display and menus.

use derive_more::Display;
use std::io::{BufRead, Write};
use tracing::{instrument, warn};
use ttt_engine::{
    Board, GameEvent, GameObserver, GameOutcome, GameStatus, Mark, PlayerKind, SharedInput,
};

/// Why a menu answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MenuError {
    /// Nothing but whitespace was entered.
    #[display("Input cannot be empty")]
    Empty,

    /// Not one of the player type choices.
    #[display("Invalid choice. Enter 1 for Human or 2 for AI")]
    InvalidPlayerType,

    /// Not a yes/no answer.
    #[display("Invalid input. Enter 'y' for yes or 'n' for no")]
    InvalidAnswer,
}

impl std::error::Error for MenuError {}

/// Parses the player type menu: `1` for human, `2` for AI.
pub fn parse_player_kind(input: &str) -> Result<PlayerKind, MenuError> {
    match input.trim() {
        "" => Err(MenuError::Empty),
        "1" => Ok(PlayerKind::Human),
        "2" => Ok(PlayerKind::Ai),
        _ => Err(MenuError::InvalidPlayerType),
    }
}

/// Parses a play-again answer.
pub fn parse_play_again(input: &str) -> Result<bool, MenuError> {
    match input.trim().to_lowercase().as_str() {
        "" => Err(MenuError::Empty),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(MenuError::InvalidAnswer),
    }
}

/// Terminal front-end: prints the board and game messages, asks menu
/// questions on the shared input.
#[derive(Debug)]
pub struct Console<R, W> {
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over `input` and `output`.
    pub fn new(input: SharedInput<R>, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Reads one line; `None` once the input is exhausted.
    ///
    /// Invalid UTF-8 becomes U+FFFD, which no menu accepts.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.borrow_mut().read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Asks until `parse` accepts a line. `None` once the input is exhausted.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, MenuError>,
    ) -> std::io::Result<Option<T>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    warn!(input = %line.trim(), error = %err, "Rejected menu answer");
                    writeln!(self.output, "Invalid input: {err}")?;
                }
            }
        }
    }

    /// Asks who plays `mark`.
    #[instrument(skip(self))]
    pub fn select_player_kind(&mut self, mark: Mark) -> std::io::Result<Option<PlayerKind>> {
        writeln!(self.output, "Select Player {mark} type:")?;
        writeln!(self.output, "1. Human")?;
        writeln!(self.output, "2. AI")?;
        self.ask("Enter choice (1-2): ", parse_player_kind)
    }

    /// Asks whether to play another game. End of input counts as no.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> std::io::Result<bool> {
        writeln!(self.output)?;
        Ok(self
            .ask("Play again? (y/n): ", parse_play_again)?
            .unwrap_or(false))
    }

    /// Prints the welcome banner.
    pub fn welcome(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")
    }

    /// Prints the farewell message.
    pub fn goodbye(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "Thanks for playing!")
    }

    /// Prints an empty line.
    pub fn newline(&mut self) -> std::io::Result<()> {
        writeln!(self.output)
    }

    /// Prints the board surrounded by blank lines.
    pub fn show_board(&mut self, board: &Board) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{board}")?;
        writeln!(self.output)
    }

    fn show_event(&mut self, event: &GameEvent) -> std::io::Result<()> {
        match event {
            GameEvent::TurnStarted { mark, .. } => writeln!(self.output, "Player {mark}'s turn"),
            GameEvent::MoveMade { .. } => Ok(()),
            GameEvent::BoardChanged(board) => self.show_board(board),
            GameEvent::GameOver(GameStatus::Won(mark)) => {
                writeln!(self.output, "Player {mark} wins!")
            }
            GameEvent::GameOver(GameStatus::Draw) => {
                writeln!(self.output, "Game Over! Board is full.")
            }
            GameEvent::GameOver(GameStatus::InProgress) => Ok(()),
            GameEvent::Abandoned { mark, reason } => {
                writeln!(self.output)?;
                writeln!(self.output, "Game abandoned on Player {mark}'s turn: {reason}")
            }
        }
    }

    /// Prints a one-line summary of a finished session game.
    pub fn show_outcome(&mut self, outcome: &GameOutcome) -> std::io::Result<()> {
        match outcome {
            GameOutcome::Finished(GameStatus::Won(mark)) => {
                writeln!(self.output, "Result: Player {mark} won")
            }
            GameOutcome::Finished(_) => writeln!(self.output, "Result: draw"),
            GameOutcome::Abandoned { .. } => writeln!(self.output, "Result: no result"),
        }
    }
}

/// Write failures are logged and the game goes on; the board is only a view.
impl<R: BufRead, W: Write> GameObserver for Console<R, W> {
    fn on_event(&mut self, event: &GameEvent) {
        if let Err(err) = self.show_event(event).and_then(|()| self.output.flush()) {
            warn!(error = %err, "Failed to write to console");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use ttt_engine::{Position, shared_input};

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            shared_input(Cursor::new(script.as_bytes().to_vec())),
            Vec::new(),
        )
    }

    fn text(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_parse_player_kind() {
        assert_eq!(parse_player_kind("1\n"), Ok(PlayerKind::Human));
        assert_eq!(parse_player_kind(" 2 "), Ok(PlayerKind::Ai));
        assert_eq!(parse_player_kind(""), Err(MenuError::Empty));
        assert_eq!(parse_player_kind("3"), Err(MenuError::InvalidPlayerType));
    }

    #[test]
    fn test_parse_play_again() {
        assert_eq!(parse_play_again("Y"), Ok(true));
        assert_eq!(parse_play_again("yes\n"), Ok(true));
        assert_eq!(parse_play_again("No"), Ok(false));
        assert_eq!(parse_play_again("  "), Err(MenuError::Empty));
        assert_eq!(parse_play_again("maybe"), Err(MenuError::InvalidAnswer));
    }

    #[test]
    fn test_select_player_kind_retries() {
        let mut c = console("\n7\n2\n");
        assert_eq!(c.select_player_kind(Mark::O).unwrap(), Some(PlayerKind::Ai));
        let out = text(&c);
        assert!(out.starts_with("Select Player O type:\n1. Human\n2. AI\n"));
        assert_eq!(out.matches("Enter choice (1-2): ").count(), 3);
        assert!(out.contains("Invalid input: Input cannot be empty"));
        assert!(out.contains("Invalid input: Invalid choice. Enter 1 for Human or 2 for AI"));
    }

    #[test]
    fn test_select_player_kind_end_of_input() {
        let mut c = console("");
        assert_eq!(c.select_player_kind(Mark::X).unwrap(), None);
    }

    #[test]
    fn test_menu_rejects_invalid_utf8() {
        let mut c = Console::new(
            shared_input(Cursor::new(b"\xff\n1\n".to_vec())),
            Vec::new(),
        );
        assert_eq!(
            c.select_player_kind(Mark::X).unwrap(),
            Some(PlayerKind::Human)
        );
        let out = text(&c);
        assert_eq!(out.matches("Enter choice (1-2): ").count(), 2);
        assert!(out.contains("Invalid input: Invalid choice. Enter 1 for Human or 2 for AI"));
    }

    #[test]
    fn test_play_again_rejects_invalid_utf8() {
        let mut c = Console::new(
            shared_input(Cursor::new(b"\xc3\n\xffy\ny\n".to_vec())),
            Vec::new(),
        );
        assert!(c.play_again().unwrap());
        assert_eq!(text(&c).matches("Play again? (y/n): ").count(), 3);
    }

    /// Writer whose every write fails.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("terminal gone"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("terminal gone"))
        }
    }

    #[test]
    fn test_write_failures_do_not_stop_the_game() {
        use ttt_engine::{AiPlayer, Orchestrator};

        let mut c = Console::new(shared_input(Cursor::new(Vec::new())), Broken);
        let mut game = Orchestrator::new(
            Box::new(AiPlayer::new("AI X", Mark::X)),
            Box::new(AiPlayer::new("AI O", Mark::O)),
            Mark::X,
        );
        assert_eq!(
            game.run(&mut c).unwrap(),
            GameOutcome::Finished(GameStatus::Draw)
        );
    }

    #[test]
    fn test_play_again_end_of_input_is_no() {
        let mut c = console("what\n");
        assert!(!c.play_again().unwrap());
        assert!(text(&c).contains("Invalid input: Invalid input. Enter 'y' for yes or 'n' for no"));
    }

    #[test]
    fn test_renders_events() {
        let mut c = console("");
        let board = Board::new().place(Position::Center, Mark::X).unwrap();
        c.on_event(&GameEvent::TurnStarted {
            mark: Mark::X,
            player: "Player X".into(),
        });
        c.on_event(&GameEvent::MoveMade {
            mark: Mark::X,
            position: Position::Center,
        });
        c.on_event(&GameEvent::BoardChanged(board));
        c.on_event(&GameEvent::GameOver(GameStatus::Won(Mark::X)));
        c.on_event(&GameEvent::GameOver(GameStatus::Draw));

        let expected = "Player X's turn\n\n 1 | 2 | 3 \n-----------\n 4 | X | 6 \n-----------\n 7 | 8 | 9 \n\nPlayer X wins!\nGame Over! Board is full.\n";
        assert_eq!(text(&c), expected);
    }
}
