//! The 3x3 board value type.

use crate::error::{BoardParseError, MoveError};
use crate::position::Position;
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// `Board` is a plain value: copying it copies the grid, and every mutation
/// returns a new board. A square, once occupied, is never cleared or
/// overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Gets the square at a 0-based row and column.
    pub fn cell(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_coordinates(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Every empty position, in ascending order.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Places `mark` at a 1-based position number.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] if `position` is not in 1..=9,
    /// [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(level = "trace")]
    pub fn apply_move(&self, position: i64, mark: Mark) -> Result<Board, MoveError> {
        let pos = Position::from_number(position)?;
        self.place(pos, mark)
    }

    /// Places `mark` at `pos`, returning the new board.
    ///
    /// # Errors
    ///
    /// [`MoveError::CellOccupied`] if the cell already holds a mark.
    pub fn place(&self, pos: Position, mark: Mark) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied { position: pos });
        }
        let mut next = *self;
        next.squares[pos.index()] = Square::Occupied(mark);
        Ok(next)
    }

    /// Display label of a cell: its mark, or its number while empty.
    pub fn label(&self, pos: Position) -> String {
        match self.get(pos) {
            Square::Empty => pos.number().to_string(),
            Square::Occupied(mark) => mark.to_string(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::from_coordinates(row, col))
                .map(|pos| self.label(pos))
                .collect();
            write!(f, " {} ", cells.join(" | "))?;
            if row < 2 {
                write!(f, "\n-----------\n")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells: `X`/`O` for marks, `.`, `-`, `_` or the cell's own
    /// digit for empty. Whitespace, `|` and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().copied().zip(cells) {
            board.squares[pos.index()] = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' => Square::Empty,
                d if d.is_ascii_digit() => {
                    if d.to_digit(10) != Some(u32::from(pos.number())) {
                        return Err(BoardParseError::MisplacedDigit {
                            digit: d,
                            position: pos,
                        });
                    }
                    Square::Empty
                }
                other => return Err(BoardParseError::InvalidCell(other)),
            };
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(board.available_moves(), Position::ALL.to_vec());
        assert!(!board.is_full());
    }

    #[test]
    fn test_available_moves_skip_occupied() {
        let board = Board::new()
            .place(Position::TopLeft, Mark::X)
            .unwrap()
            .place(Position::Center, Mark::O)
            .unwrap();
        let moves: Vec<u8> = board.available_moves().into_iter().map(Position::number).collect();
        assert_eq!(moves, vec![2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.apply_move(0, Mark::X),
            Err(MoveError::OutOfRange { position: 0 })
        );
        assert_eq!(
            board.apply_move(10, Mark::O),
            Err(MoveError::OutOfRange { position: 10 })
        );
    }

    #[test]
    fn test_apply_move_occupied() {
        let board = Board::new().apply_move(5, Mark::X).unwrap();
        for mark in [Mark::X, Mark::O] {
            assert_eq!(
                board.apply_move(5, mark),
                Err(MoveError::CellOccupied {
                    position: Position::Center
                })
            );
        }
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let board = Board::new();
        let next = board.apply_move(1, Mark::X).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.get(Position::TopLeft), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_round_trip_through_coordinates() {
        for n in 1..=9_i64 {
            for mark in [Mark::X, Mark::O] {
                let board = Board::new().apply_move(n, mark).unwrap();
                let row = ((n - 1) / 3) as usize;
                let col = ((n - 1) % 3) as usize;
                assert_eq!(board.cell(row, col), Some(Square::Occupied(mark)));
                assert_eq!(board.count(mark), 1);
            }
        }
        assert_eq!(Board::new().cell(3, 3), None);
    }

    #[test]
    fn test_display_shows_numbers_for_empty_cells() {
        let board = Board::new()
            .apply_move(1, Mark::X)
            .unwrap()
            .apply_move(5, Mark::O)
            .unwrap();
        let expected = " X | 2 | 3 \n-----------\n 4 | O | 6 \n-----------\n 7 | 8 | 9 ";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_parse_notation() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Mark::O));
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::O));
        assert_eq!(board.available_moves().len(), 5);

        let same: Board = "x|x|3/o|o|6/7|8|9".parse().unwrap();
        assert_eq!(board, same);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(2))
        );
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(BoardParseError::InvalidCell('?'))
        );
        assert_eq!(
            "1.......1".parse::<Board>(),
            Err(BoardParseError::MisplacedDigit {
                digit: '1',
                position: Position::BottomRight
            })
        );
    }
}
