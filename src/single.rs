//! Single-shot driver: one parsed board, one human move, one verdict.
//!
//! The initial position arrives as a flat `_XO` line; the side to move is
//! inferred from symbol counts, so no separate turn field is needed.

use crate::console::Console;
use crate::game::{Board, rules};
use crate::players::{HumanPlayer, MoveSelector};
use anyhow::{Context, Result, bail};
use tracing::info;

/// Reads an initial board, applies exactly one human move, and reports the
/// outcome (which may be `Game not finished`).
pub fn run(console: &mut Console<'_>, size: usize) -> Result<()> {
    if size == 0 {
        bail!("board size must be at least 1");
    }

    let mut board = read_board(console, size)?;
    console.show_board(&board)?;

    let mover = board.next_player();
    let cell = HumanPlayer::new().select_move(&board, console)?;
    board
        .apply_move(cell, mover)
        .context("validated move failed to apply")?;
    console.show_board(&board)?;

    let outcome = rules::outcome_after(&board, cell);
    info!(%outcome, "single move applied");
    console.say(outcome.to_string())?;
    Ok(())
}

/// Re-prompts until one line parses as a full board.
fn read_board(console: &mut Console<'_>, size: usize) -> Result<Board> {
    loop {
        console.say("Enter the cells:")?;
        let Some(line) = console.read_line()? else {
            bail!("input closed before a board was entered");
        };
        match Board::parse(size, &line) {
            Ok(board) => return Ok(board),
            Err(reason) => console.say(reason.to_string())?,
        }
    }
}
