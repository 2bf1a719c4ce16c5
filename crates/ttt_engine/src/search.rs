//! Exhaustive minimax search.
//!
//! The search enumerates the full game tree below a position, with no
//! pruning and no caching. Scores are depth-adjusted so that faster wins
//! and slower losses are preferred:
//!
//! - own win: `10 - depth`
//! - opponent win: `depth - 10`
//! - draw: `0`
//!
//! Each branch works on its own copy of the board.

use crate::board::Board;
use crate::position::Position;
use crate::rules;
use crate::types::Mark;
use tracing::{debug, instrument};

/// Score for a win found at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Minimax evaluator for one fixed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    own: Mark,
    opponent: Mark,
}

impl Minimax {
    /// Creates a searcher playing `own` against the other mark.
    pub fn new(own: Mark) -> Self {
        Self {
            own,
            opponent: own.opponent(),
        }
    }

    /// The mark this searcher maximizes for.
    pub fn own(&self) -> Mark {
        self.own
    }

    /// Score of a terminal board, or `None` while play continues.
    fn terminal_score(&self, board: &Board, depth: i32) -> Option<i32> {
        match rules::check_winner(board) {
            Some(winner) if winner == self.own => return Some(WIN_SCORE - depth),
            Some(_) => return Some(depth - WIN_SCORE),
            None => {}
        }
        if rules::is_draw(board) {
            Some(0)
        } else {
            None
        }
    }

    /// Minimax value of `board` with `to_move` about to play.
    ///
    /// Maximizes when `to_move` is the own mark, minimizes otherwise.
    pub fn score(&self, board: &Board, depth: i32, to_move: Mark) -> i32 {
        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }

        let children = board.available_moves().into_iter().filter_map(|pos| {
            board
                .place(pos, to_move)
                .ok()
                .map(|child| self.score(&child, depth + 1, to_move.opponent()))
        });

        if to_move == self.own {
            children.fold(i32::MIN, i32::max)
        } else {
            children.fold(i32::MAX, i32::min)
        }
    }

    /// Score of every available move for the own mark, in ascending order.
    pub fn scored_moves(&self, board: &Board) -> Vec<(Position, i32)> {
        board
            .available_moves()
            .into_iter()
            .filter_map(|pos| {
                board
                    .place(pos, self.own)
                    .ok()
                    .map(|child| (pos, self.score(&child, 0, self.opponent)))
            })
            .collect()
    }

    /// The optimal move for the own mark.
    ///
    /// Among equally scored moves the lowest position wins. Returns `None`
    /// only when the board is full; callers must not ask for a move on a
    /// finished game.
    #[instrument(skip(self, board), fields(own = %self.own))]
    pub fn best_move(&self, board: &Board) -> Option<Position> {
        debug_assert_eq!(
            rules::check_winner(board),
            None,
            "best_move called on a won board"
        );

        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in self.scored_moves(board) {
            debug!(position = %pos, score, "Evaluated move");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        if let Some((pos, score)) = best {
            debug!(position = %pos, score, "Chose move");
        }
        best.map(|(pos, _)| pos)
    }
}
