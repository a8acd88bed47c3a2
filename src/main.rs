//! Console tic-tac-toe binary.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::Console;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so the game transcript on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut console = Console::stdio();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tictactoe::arena::run(&mut console),
        Command::Single { size } => tictactoe::single::run(&mut console, size),
    }
}
