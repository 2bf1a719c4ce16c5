//! Minimax analysis of a single position for the `best-move` command.

use anyhow::{Result, bail};
use std::fmt::Write;
use ttt_engine::{Board, Mark, Minimax, rules};

/// Side to move inferred from mark counts: X when counts are equal.
pub fn infer_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) <= board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Renders the board, every move's score, and the chosen move.
pub fn analyze(board: &Board, to_move: Option<Mark>) -> Result<String> {
    let status = rules::status(board);
    if status.is_terminal() {
        bail!("Board is already decided: {status:?}");
    }

    let mark = to_move.unwrap_or_else(|| infer_to_move(board));
    let search = Minimax::new(mark);

    let mut report = String::new();
    writeln!(report, "{board}")?;
    writeln!(report)?;
    writeln!(report, "{mark} to move")?;
    for (position, score) in search.scored_moves(board) {
        writeln!(report, "  {position} ({}): {score:+}", position.label())?;
    }
    if let Some(best) = search.best_move(board) {
        writeln!(report, "Best move: {best}")?;
    }
    Ok(report)
}
