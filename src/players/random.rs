//! Random bot, the "easy" difficulty.

use super::MoveSelector;
use crate::console::Console;
use crate::game::{Board, Cell};
use anyhow::{Context, Result};
use rand::prelude::IndexedRandom;
use tracing::debug;

/// Bot that plays a uniformly random empty cell.
#[derive(Debug, Default)]
pub struct RandomBot;

impl RandomBot {
    /// Creates a new random bot.
    pub fn new() -> Self {
        Self
    }
}

impl MoveSelector for RandomBot {
    fn select_move(&mut self, board: &Board, console: &mut Console<'_>) -> Result<Cell> {
        console.say("Making move level \"easy\"")?;
        let cells = board.empty_cells();
        let cell = *cells
            .choose(&mut rand::rng())
            .context("no empty cells left to play")?;
        debug!(?cell, "random bot chose a cell");
        Ok(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_an_empty_cell() {
        let board = Board::parse(3, "XOXOXO_X_").unwrap();
        let mut out = Vec::new();
        let cell = {
            let mut console = Console::new(std::io::Cursor::new(""), &mut out);
            RandomBot::new().select_move(&board, &mut console).unwrap()
        };
        assert!(board.is_empty(cell));
        assert!(
            String::from_utf8(out)
                .unwrap()
                .contains("Making move level \"easy\"")
        );
    }

    #[test]
    fn test_fails_on_full_board() {
        let board = Board::parse(3, "XOXOXOOXO").unwrap();
        let mut console = Console::new(std::io::Cursor::new(""), Vec::new());
        assert!(RandomBot::new().select_move(&board, &mut console).is_err());
    }
}
