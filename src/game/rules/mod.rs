//! Win and draw rules.

mod outcome;
mod win;

pub use outcome::{outcome_after, wins_at};
pub use win::winner;
