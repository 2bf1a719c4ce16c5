//! Human player reading moves from a line-oriented input stream.

use super::Player;
use crate::board::Board;
use crate::error::{InputError, PlayerError};
use crate::position::Position;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{debug, instrument, warn};

/// An input stream shared by every reader in one session.
///
/// Two human players (and the console menus) take turns reading the same
/// stream, so they hold it through a shared handle instead of separate
/// buffers.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// Wraps a reader for sharing.
pub fn shared_input<R: BufRead>(reader: R) -> SharedInput<R> {
    Rc::new(RefCell::new(reader))
}

/// Parses one line of input into a free position on `board`.
///
/// # Errors
///
/// Each rejection has its own [`InputError`] variant: empty input,
/// non-integer input, a number outside 1-9, or an occupied cell.
#[instrument(skip(board))]
pub fn parse_move(input: &str, board: &Board) -> Result<Position, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value: i64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })?;
    let position = Position::from_number(value)?;

    if !board.is_empty(position) {
        return Err(InputError::Occupied { position });
    }
    Ok(position)
}

/// Human player prompting on `output` and reading lines from `input`.
#[derive(Debug)]
pub struct HumanPlayer<R, W> {
    name: String,
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: SharedInput<R>, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// The prompt and rejection output written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        write!(self.output, "Enter your move (1-9): ")?;
        self.output.flush()
    }

    fn reject(&mut self, err: &InputError) -> std::io::Result<()> {
        match err {
            InputError::Occupied { .. } => {
                writeln!(self.output, "Position already taken, try again")
            }
            other => writeln!(self.output, "Invalid input: {other}"),
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn get_move(&mut self, board: &Board) -> Result<Position, PlayerError> {
        loop {
            self.prompt()?;

            let mut bytes = Vec::new();
            if self.input.borrow_mut().read_until(b'\n', &mut bytes)? == 0 {
                warn!("Input stream closed while waiting for a move");
                return Err(PlayerError::InputClosed);
            }

            // Invalid UTF-8 becomes U+FFFD, which never parses as a number.
            let line = String::from_utf8_lossy(&bytes);
            match parse_move(&line, board) {
                Ok(position) => {
                    debug!(%position, "Accepted move");
                    return Ok(position);
                }
                Err(err) => {
                    warn!(input = %line.trim(), error = %err, "Rejected move");
                    self.reject(&err)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
