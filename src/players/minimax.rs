//! Minimax bot, the "hard" difficulty.

use super::MoveSelector;
use crate::console::Console;
use crate::game::{Board, Cell, Player, rules};
use anyhow::{Context, Result};
use tracing::debug;

/// Score of a subtree won by the root mover. Terminal draws score 0.
const WIN_SCORE: i32 = 10;

/// Perfect-play bot backed by a full-depth minimax search.
///
/// The remaining game tree of a 3x3 board is at most 9 plies deep, so the
/// search is exhaustive; no pruning or memoization is needed.
#[derive(Debug, Default)]
pub struct MinimaxBot;

impl MinimaxBot {
    /// Creates a new minimax bot.
    pub fn new() -> Self {
        Self
    }
}

impl MoveSelector for MinimaxBot {
    fn select_move(&mut self, board: &Board, console: &mut Console<'_>) -> Result<Cell> {
        console.say("Making move level \"hard\"")?;
        let mover = board.next_player();
        let mut scratch = board.clone();
        let (cell, score) = search(&mut scratch, mover, mover);
        let cell = cell.context("no empty cells left to play")?;
        debug!(?cell, score, "minimax picked a cell");
        Ok(cell)
    }
}

/// Depth-first minimax over `board`, trying each empty cell and rolling the
/// placement back afterwards.
///
/// Scores are oriented to `root`: +10 when a subtree ends in a root win, -10
/// for a root loss, 0 for a draw, with no depth discount. The mover's plies
/// maximize, the opponent's minimize, and ties resolve to the first cell in
/// row-major order (strict comparisons, no replacement on equal score).
fn search(board: &mut Board, to_move: Player, root: Player) -> (Option<Cell>, i32) {
    // The previous ply may have completed a line.
    if let Some(winner) = rules::winner(board) {
        let score = if winner == root { WIN_SCORE } else { -WIN_SCORE };
        return (None, score);
    }
    if board.is_full() {
        return (None, 0);
    }

    let maximizing = to_move == root;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_cell = None;

    for cell in board.empty_cells() {
        board.place(cell, to_move);
        let (_, score) = search(board, to_move.opponent(), root);
        board.clear(cell);

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_cell = Some(cell);
        }
    }

    (best_cell, best_score)
}
