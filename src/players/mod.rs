//! Move selection strategies.
//!
//! Each side of a match is owned by one [`MoveSelector`]: coordinates typed
//! by a human, a uniform-random bot, a one-ply win-or-block heuristic, or an
//! exhaustive minimax search.

mod heuristic;
mod human;
mod minimax;
mod random;

pub use heuristic::HeuristicBot;
pub use human::{CoordinateError, HumanPlayer};
pub use minimax::MinimaxBot;
pub use random::RandomBot;

use crate::console::Console;
use crate::game::{Board, Cell};
use anyhow::Result;

/// A strategy that produces moves for one side of the board.
pub trait MoveSelector {
    /// Produces the next move for the side whose turn it is.
    ///
    /// Implementations may talk to the user through `console`; the returned
    /// cell must be in bounds and currently empty.
    fn select_move(&mut self, board: &Board, console: &mut Console<'_>) -> Result<Cell>;
}

/// Player token accepted by the `start` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Coordinates typed by a human.
    User,
    /// Uniform-random empty cell.
    Easy,
    /// Win if possible, block otherwise, random fallback.
    Medium,
    /// Exhaustive minimax search.
    Hard,
}

impl PlayerKind {
    /// Builds the selector implementing this strategy.
    pub fn into_selector(self) -> Box<dyn MoveSelector> {
        match self {
            PlayerKind::User => Box::new(HumanPlayer::new()),
            PlayerKind::Easy => Box::new(RandomBot::new()),
            PlayerKind::Medium => Box::new(HeuristicBot::new()),
            PlayerKind::Hard => Box::new(MinimaxBot::new()),
        }
    }
}
