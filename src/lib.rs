//! Console tic-tac-toe with human and bot opponents.
//!
//! Two thin drivers share the same board and rules:
//!
//! - [`arena`]: reads a `start <p1> <p2>` command and plays a full match
//!   where each side is a [`players::MoveSelector`] (`user`, `easy`,
//!   `medium`, or `hard`).
//! - [`single`]: parses an initial board from one flat `_XO` line, applies
//!   exactly one human move, and reports the verdict.
//!
//! The side to move is always derived from symbol counts on the board, never
//! stored, so a board restored from serialized input carries its own turn
//! order.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod console;
pub mod game;
pub mod players;
pub mod single;

pub use console::Console;
pub use game::{Board, Cell, MoveError, Outcome, ParseBoardError, Player, Square};
pub use players::{HeuristicBot, HumanPlayer, MinimaxBot, MoveSelector, PlayerKind, RandomBot};
