//! Command-line interface for the console game.

use clap::{Parser, Subcommand};

/// Console tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe with human and bot opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to `play`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read a `start <p1> <p2>` command and play a full match
    Play,

    /// Apply one move to a board read as a flat line of `_XO` cells
    Single {
        /// Board side length
        #[arg(long, default_value = "3")]
        size: usize,
    },
}
