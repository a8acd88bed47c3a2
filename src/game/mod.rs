//! Board state and game rules shared by both drivers.

mod board;
pub mod rules;

pub use board::{Board, Cell, MoveError, Outcome, ParseBoardError, Player, Square};
