//! Error types for the engine.

use crate::position::Position;
use crate::types::Mark;

/// A move that the board refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position number is not in 1..=9.
    #[display("Position {} is out of range (must be 1-9)", position)]
    OutOfRange {
        /// The rejected number.
        position: i64,
    },

    /// The target cell already holds a mark.
    #[display("Position {} is already occupied", position)]
    CellOccupied {
        /// The occupied cell.
        position: Position,
    },
}

impl std::error::Error for MoveError {}

/// Why a line of human input was rejected.
///
/// Every variant is recoverable: the human player reports it and asks again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing but whitespace was entered.
    #[display("Input cannot be empty")]
    Empty,

    /// The input is not an integer.
    #[display("Input must be a number")]
    NotANumber {
        /// The trimmed input.
        input: String,
    },

    /// The integer is not a cell number.
    #[display("Position must be between 1 and 9")]
    OutOfRange {
        /// The number entered.
        value: i64,
    },

    /// The cell is already taken.
    #[display("Position already taken")]
    Occupied {
        /// The occupied cell.
        position: Position,
    },
}

impl std::error::Error for InputError {}

impl From<MoveError> for InputError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::OutOfRange { position } => InputError::OutOfRange { value: position },
            MoveError::CellOccupied { position } => InputError::Occupied { position },
        }
    }
}

/// A move source could not produce a move.
#[derive(Debug, derive_more::Display)]
pub enum PlayerError {
    /// The input stream reached its end.
    #[display("No further input")]
    InputClosed,

    /// Reading input failed.
    #[display("Failed to read input: {}", _0)]
    Io(std::io::Error),

    /// The board has no empty cell left.
    #[display("No legal moves available")]
    NoLegalMoves,
}

impl std::error::Error for PlayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayerError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        PlayerError::Io(err)
    }
}

/// Fatal failure while running a turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// A move source returned a move the board rejects.
    #[display("{} ({}) played an illegal move: {}", player, mark, source)]
    IllegalMove {
        /// Name of the offending player.
        player: String,
        /// Mark the player was moving for.
        mark: Mark,
        /// Why the board refused the move.
        source: MoveError,
    },
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::IllegalMove { source, .. } => Some(source),
        }
    }
}

/// Error parsing the text board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The notation does not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),

    /// A character that is neither a mark nor an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCell(char),

    /// A digit placeholder that does not match its cell.
    #[display("Digit {} found in cell {}", digit, position)]
    MisplacedDigit {
        /// The digit found.
        digit: char,
        /// The cell it was found in.
        position: Position,
    },
}

impl std::error::Error for BoardParseError {}
