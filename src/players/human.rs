//! Human player reading 1-indexed coordinates from the console.

use super::MoveSelector;
use crate::console::Console;
use crate::game::{Board, Cell, MoveError};
use anyhow::{Result, bail};
use derive_more::{Display, Error, From};
use tracing::debug;

/// Why a line of coordinate input was rejected.
///
/// Each condition is retryable; the selector re-prompts after printing the
/// `Display` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum CoordinateError {
    /// Missing or non-numeric tokens.
    #[display("You should enter numbers!")]
    Malformed,
    /// Out-of-range or occupied target cell.
    #[display("{_0}")]
    #[from]
    Move(MoveError),
}

/// Interactive selector: re-prompts until the input names a legal move.
#[derive(Debug, Default)]
pub struct HumanPlayer;

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new() -> Self {
        Self
    }
}

impl MoveSelector for HumanPlayer {
    fn select_move(&mut self, board: &Board, console: &mut Console<'_>) -> Result<Cell> {
        loop {
            let Some(line) = console.prompt("Enter the coordinates: ")? else {
                bail!("input closed before a valid move was entered");
            };
            match parse_coordinates(board, &line) {
                Ok(cell) => return Ok(cell),
                Err(reason) => {
                    debug!(%reason, input = %line, "rejected coordinate input");
                    console.say(reason.to_string())?;
                }
            }
        }
    }
}

/// Parses a 1-indexed `row column` pair and validates it against the board.
fn parse_coordinates(board: &Board, line: &str) -> Result<Cell, CoordinateError> {
    let mut tokens = line.split_whitespace();
    let (Some(row), Some(column)) = (tokens.next(), tokens.next()) else {
        return Err(CoordinateError::Malformed);
    };

    // Signed parse so that "0 0" and "-1 2" report the range message, the
    // same way a human reads them, rather than the numeric one.
    let row: i64 = row.parse().map_err(|_| CoordinateError::Malformed)?;
    let column: i64 = column.parse().map_err(|_| CoordinateError::Malformed)?;

    let size = board.size() as i64;
    if !(1..=size).contains(&row) || !(1..=size).contains(&column) {
        return Err(MoveError::OutOfRange(board.size()).into());
    }

    let cell = Cell::new(row as usize - 1, column as usize - 1);
    board.validate_move(cell)?;
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_valid_coordinates() {
        let board = Board::new(3);
        assert_eq!(parse_coordinates(&board, "1 1"), Ok(Cell::new(0, 0)));
        assert_eq!(parse_coordinates(&board, "3 1"), Ok(Cell::new(2, 0)));
        assert_eq!(parse_coordinates(&board, " 2  3 "), Ok(Cell::new(1, 2)));
    }

    #[test]
    fn test_malformed_input() {
        let board = Board::new(3);
        assert_eq!(
            parse_coordinates(&board, "one three"),
            Err(CoordinateError::Malformed)
        );
        assert_eq!(parse_coordinates(&board, "1"), Err(CoordinateError::Malformed));
        assert_eq!(parse_coordinates(&board, ""), Err(CoordinateError::Malformed));
    }

    #[test]
    fn test_out_of_range() {
        let board = Board::new(3);
        let err = CoordinateError::Move(MoveError::OutOfRange(3));
        assert_eq!(parse_coordinates(&board, "4 1"), Err(err));
        assert_eq!(parse_coordinates(&board, "0 2"), Err(err));
        assert_eq!(parse_coordinates(&board, "-1 2"), Err(err));
    }

    #[test]
    fn test_occupied_cell() {
        let mut board = Board::new(3);
        board.apply_move(Cell::new(0, 0), Player::X).unwrap();
        assert_eq!(
            parse_coordinates(&board, "1 1"),
            Err(CoordinateError::Move(MoveError::CellOccupied))
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CoordinateError::Malformed.to_string(),
            "You should enter numbers!"
        );
        assert_eq!(
            CoordinateError::Move(MoveError::CellOccupied).to_string(),
            "This cell is occupied! Choose another one!"
        );
    }

    #[test]
    fn test_reprompts_until_valid() {
        let input = std::io::Cursor::new("9 9\nfoo\n2 2\n");
        let mut out = Vec::new();
        let board = Board::new(3);
        let cell = {
            let mut console = Console::new(input, &mut out);
            HumanPlayer::new()
                .select_move(&board, &mut console)
                .unwrap()
        };
        assert_eq!(cell, Cell::new(1, 1));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Coordinates should be from 1 to 3!"));
        assert!(output.contains("You should enter numbers!"));
    }
}
