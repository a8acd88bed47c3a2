//! Full-board win detection.

use crate::game::{Board, Cell, Player, Square};
use tracing::instrument;

/// Scans every row, column, and both diagonals for a completed line.
///
/// Returns `Some(player)` if that player owns a full line, `None` otherwise.
/// The minimax search calls this at every node, where no single "last move"
/// exists; the drivers use the localized check in
/// [`outcome_after`](super::outcome_after) instead.
#[instrument(level = "debug", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let n = board.size();

    for row in 0..n {
        if let Some(player) = line_owner(board, (0..n).map(|column| Cell::new(row, column))) {
            return Some(player);
        }
    }

    for column in 0..n {
        if let Some(player) = line_owner(board, (0..n).map(|row| Cell::new(row, column))) {
            return Some(player);
        }
    }

    if let Some(player) = line_owner(board, (0..n).map(|i| Cell::new(i, i))) {
        return Some(player);
    }
    if let Some(player) = line_owner(board, (0..n).map(|i| Cell::new(i, n - 1 - i))) {
        return Some(player);
    }

    None
}

/// The player owning every cell of `line`, if any.
fn line_owner(board: &Board, line: impl Iterator<Item = Cell>) -> Option<Player> {
    let mut owner = None;
    for cell in line {
        match board.square(cell) {
            Square::Empty => return None,
            Square::Occupied(player) => match owner {
                None => owner = Some(player),
                Some(existing) if existing != player => return None,
                Some(_) => {}
            },
        }
    }
    owner
}
