//! Interactive driver: the command prompt and the match loop.
//!
//! Reads `start <p1> <p2>` / `exit` commands, then plays one full match
//! where each side is one of the four [`PlayerKind`] strategies.

use crate::console::Console;
use crate::game::{Board, Outcome, Player, rules};
use crate::players::PlayerKind;
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::info;

/// Side length of the interactive match board.
const BOARD_SIZE: usize = 3;

/// Rejected startup command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Bad parameters!")]
pub struct BadCommand;

/// Command accepted at the `Input command:` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuCommand {
    Start(PlayerKind, PlayerKind),
    Exit,
}

fn parse_command(line: &str) -> Result<MenuCommand, BadCommand> {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some("exit") => Ok(MenuCommand::Exit),
        Some("start") => {
            let first = player_token(tokens.next())?;
            let second = player_token(tokens.next())?;
            Ok(MenuCommand::Start(first, second))
        }
        _ => Err(BadCommand),
    }
}

fn player_token(token: Option<&str>) -> Result<PlayerKind, BadCommand> {
    token
        .and_then(|t| PlayerKind::from_str(t).ok())
        .ok_or(BadCommand)
}

/// Reads commands until `start <p1> <p2>` begins a match or `exit` quits.
///
/// Malformed commands print `Bad parameters!` and re-prompt. Returns once
/// the match finishes, on `exit`, or when input is exhausted.
pub fn run(console: &mut Console<'_>) -> Result<()> {
    loop {
        let Some(line) = console.prompt("Input command: ")? else {
            return Ok(());
        };
        match parse_command(&line) {
            Ok(MenuCommand::Exit) => return Ok(()),
            Ok(MenuCommand::Start(first, second)) => {
                info!(?first, ?second, "starting match");
                play_match(console, first, second)?;
                return Ok(());
            }
            Err(reason) => console.say(reason.to_string())?,
        }
    }
}

/// Plays one 3x3 match to completion: X owned by `first`, O by `second`.
///
/// Each iteration asks the selector owning the derived turn for a move,
/// applies it, renders the board, and checks the lines through the move.
pub fn play_match(
    console: &mut Console<'_>,
    first: PlayerKind,
    second: PlayerKind,
) -> Result<Outcome> {
    let mut board = Board::new(BOARD_SIZE);
    let mut x = first.into_selector();
    let mut o = second.into_selector();

    console.show_board(&board)?;
    loop {
        let mover = board.next_player();
        let selector = match mover {
            Player::X => x.as_mut(),
            Player::O => o.as_mut(),
        };
        let cell = selector.select_move(&board, console)?;
        board
            .apply_move(cell, mover)
            .context("selector produced an illegal move")?;
        console.show_board(&board)?;

        let outcome = rules::outcome_after(&board, cell);
        if outcome != Outcome::Running {
            console.say(outcome.to_string())?;
            info!(%outcome, "match finished");
            return Ok(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_command() {
        assert_eq!(
            parse_command("start user hard"),
            Ok(MenuCommand::Start(PlayerKind::User, PlayerKind::Hard))
        );
        assert_eq!(
            parse_command("  start   easy medium "),
            Ok(MenuCommand::Start(PlayerKind::Easy, PlayerKind::Medium))
        );
    }

    #[test]
    fn test_parse_exit_command() {
        assert_eq!(parse_command("exit"), Ok(MenuCommand::Exit));
    }

    #[test]
    fn test_parse_bad_commands() {
        assert_eq!(parse_command(""), Err(BadCommand));
        assert_eq!(parse_command("begin easy easy"), Err(BadCommand));
        assert_eq!(parse_command("start"), Err(BadCommand));
        assert_eq!(parse_command("start easy"), Err(BadCommand));
        assert_eq!(parse_command("start easy impossible"), Err(BadCommand));
        assert_eq!(BadCommand.to_string(), "Bad parameters!");
    }
}
