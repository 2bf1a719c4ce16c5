//! Board positions and the 1-9 numbering used by human players.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};

/// A cell on the tic-tac-toe board.
///
/// Cells are numbered 1-9 in row-major order, 1 being top-left and 9
/// bottom-right. That numbering is what humans type and what the board
/// display shows in unoccupied cells, so it must not change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Parses a 1-based cell number.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] unless `number` is in 1..=9.
    pub fn from_number(number: i64) -> Result<Self, MoveError> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(Self::from_index)
            .ok_or(MoveError::OutOfRange { position: number })
    }

    /// Creates a position from a 0-based row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from 0-based row and column.
    pub fn from_coordinates(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// 0-based row-major index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-based cell number (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// 0-based row: `(number - 1) / 3`.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// 0-based column: `(number - 1) % 3`.
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
