//! Localized outcome detection after a move.
//!
//! A win can only be completed by a line through the last-placed cell, so the
//! post-move check inspects the row, the column, and the diagonal(s) through
//! that cell instead of rescanning the whole board.

use crate::game::{Board, Cell, Outcome, Square};
use tracing::instrument;

/// Whether the mark at `cell` completes a line through `cell`.
///
/// Returns `false` if `cell` is empty.
#[instrument(level = "debug", skip(board))]
pub fn wins_at(board: &Board, cell: Cell) -> bool {
    let Square::Occupied(mark) = board.square(cell) else {
        return false;
    };
    let n = board.size();
    let owned = |c: Cell| board.square(c) == Square::Occupied(mark);

    if (0..n).all(|row| owned(Cell::new(row, cell.column))) {
        return true;
    }
    if (0..n).all(|column| owned(Cell::new(cell.row, column))) {
        return true;
    }
    if cell.row == cell.column && (0..n).all(|i| owned(Cell::new(i, i))) {
        return true;
    }
    if cell.row + cell.column == n - 1 && (0..n).all(|i| owned(Cell::new(i, n - 1 - i))) {
        return true;
    }

    false
}

/// Outcome after `last` was placed.
///
/// The win check precedes the full-board check, so a move that completes a
/// line while filling the board reports the win, not the draw.
#[instrument(level = "debug", skip(board))]
pub fn outcome_after(board: &Board, last: Cell) -> Outcome {
    match board.square(last) {
        Square::Empty => Outcome::Running,
        Square::Occupied(mark) => {
            if wins_at(board, last) {
                Outcome::Won(mark)
            } else if board.is_full() {
                Outcome::Draw
            } else {
                Outcome::Running
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_row_win_through_last_move() {
        let board = Board::parse(3, "XXX_OO___").unwrap();
        assert_eq!(
            outcome_after(&board, Cell::new(0, 2)),
            Outcome::Won(Player::X)
        );
    }

    #[test]
    fn test_column_win_through_last_move() {
        let board = Board::parse(3, "OX_OX_O__").unwrap();
        assert_eq!(
            outcome_after(&board, Cell::new(2, 0)),
            Outcome::Won(Player::O)
        );
    }

    #[test]
    fn test_anti_diagonal_win_through_last_move() {
        let board = Board::parse(3, "XXO_O_OX_").unwrap();
        assert_eq!(
            outcome_after(&board, Cell::new(1, 1)),
            Outcome::Won(Player::O)
        );
    }

    #[test]
    fn test_running_mid_game() {
        let board = Board::parse(3, "XO_______").unwrap();
        assert_eq!(outcome_after(&board, Cell::new(0, 1)), Outcome::Running);
    }

    #[test]
    fn test_draw_on_full_board() {
        let board = Board::parse(3, "XOXOXOOXO").unwrap();
        assert_eq!(outcome_after(&board, Cell::new(2, 2)), Outcome::Draw);
    }

    #[test]
    fn test_win_precedes_draw_when_board_fills() {
        // X's last move at (2, 0) both fills the board and completes the
        // first column; the verdict must be the win.
        let board = Board::parse(3, "XOXXOOXXO").unwrap();
        assert!(board.is_full());
        assert_eq!(
            outcome_after(&board, Cell::new(2, 0)),
            Outcome::Won(Player::X)
        );
    }

    #[test]
    fn test_no_win_through_unrelated_line() {
        // A complete X row exists, but the inspected cell is elsewhere and
        // completes nothing.
        let board = Board::parse(3, "XXXOO____").unwrap();
        assert_eq!(outcome_after(&board, Cell::new(1, 1)), Outcome::Running);
        assert!(!wins_at(&board, Cell::new(1, 1)));
    }
}
