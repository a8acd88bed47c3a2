//! One-ply heuristic bot, the "medium" difficulty.

use super::MoveSelector;
use crate::console::Console;
use crate::game::{Board, Cell, Player, rules};
use anyhow::{Context, Result};
use rand::prelude::IndexedRandom;
use tracing::debug;

/// Bot that takes an immediate win, blocks an immediate opponent win, and
/// otherwise plays a random empty cell.
///
/// The win and block probes scan in row-major order and stop at the first
/// hit, so those branches are deterministic; randomness only applies to the
/// fallback.
#[derive(Debug, Default)]
pub struct HeuristicBot;

impl HeuristicBot {
    /// Creates a new heuristic bot.
    pub fn new() -> Self {
        Self
    }
}

impl MoveSelector for HeuristicBot {
    fn select_move(&mut self, board: &Board, console: &mut Console<'_>) -> Result<Cell> {
        console.say("Making move level \"medium\"")?;
        let mover = board.next_player();
        let mut scratch = board.clone();

        if let Some(cell) = completing_move(&mut scratch, mover) {
            debug!(?cell, "taking the winning cell");
            return Ok(cell);
        }
        if let Some(cell) = completing_move(&mut scratch, mover.opponent()) {
            debug!(?cell, "blocking the opponent");
            return Ok(cell);
        }

        let cells = board.empty_cells();
        let cell = *cells
            .choose(&mut rand::rng())
            .context("no empty cells left to play")?;
        debug!(?cell, "no win or block available, playing at random");
        Ok(cell)
    }
}

/// First empty cell, in row-major order, where `mark` would complete a line.
///
/// Probes by placing `mark` and rolling back; the board is unchanged on
/// return.
fn completing_move(board: &mut Board, mark: Player) -> Option<Cell> {
    for cell in board.empty_cells() {
        board.place(cell, mark);
        let wins = rules::wins_at(board, cell);
        board.clear(cell);
        if wins {
            return Some(cell);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(board: &Board) -> Cell {
        let mut console = Console::new(std::io::Cursor::new(""), Vec::new());
        HeuristicBot::new()
            .select_move(board, &mut console)
            .unwrap()
    }

    #[test]
    fn test_takes_winning_cell_over_block() {
        // X to move; both X and O can complete their top rows. The winning
        // cell must be chosen, not the blocking one.
        let board = Board::parse(3, "XX_OO____").unwrap();
        assert_eq!(board.next_player(), Player::X);
        assert_eq!(select(&board), Cell::new(0, 2));
    }

    #[test]
    fn test_blocks_opponent_win() {
        // O to move with no win of its own; X threatens the top row.
        let board = Board::parse(3, "XX_O_____").unwrap();
        assert_eq!(board.next_player(), Player::O);
        assert_eq!(select(&board), Cell::new(0, 2));
    }

    #[test]
    fn test_win_probe_is_row_major() {
        // X can complete the middle column at (2, 1) or the main diagonal at
        // (2, 2); row-major order makes (2, 1) authoritative.
        let board = Board::parse(3, "XXO_X_O__").unwrap();
        let mut scratch = board.clone();
        assert_eq!(
            completing_move(&mut scratch, Player::X),
            Some(Cell::new(2, 1))
        );
        assert_eq!(scratch, board);
    }

    #[test]
    fn test_fallback_plays_some_empty_cell() {
        let board = Board::parse(3, "X___O____").unwrap();
        let cell = select(&board);
        assert!(board.is_empty(cell));
    }
}
