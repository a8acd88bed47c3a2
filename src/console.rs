//! Console I/O shared by the two drivers.
//!
//! Drivers and move selectors talk to the user through a [`Console`] handle
//! over injectable streams, so tests can run them against in-memory buffers
//! instead of a terminal.

use crate::game::{Board, Cell, Square};
use std::io::{self, BufRead, Write};

/// Line-oriented console handle.
pub struct Console<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
}

impl Console<'static> {
    /// Console over the process stdin and stdout.
    pub fn stdio() -> Self {
        Self {
            input: Box::new(io::stdin().lock()),
            output: Box::new(io::stdout()),
        }
    }
}

impl<'a> Console<'a> {
    /// Console over arbitrary streams.
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Prints `prompt` without a trailing newline and reads one input line.
    ///
    /// Returns `None` once the input stream is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one input line, without a prompt.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string().into())
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        self.output.flush()
    }

    /// Prints the board in the bordered grid format.
    pub fn show_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "{}", render(board))?;
        self.output.flush()
    }
}

/// Formats the board: a `-` rule sized to N², `| `-prefixed rows with
/// space-separated symbols, empty squares rendered as spaces.
pub fn render(board: &Board) -> String {
    let n = board.size();
    let rule = "-".repeat(n * n);

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for row in 0..n {
        out.push_str("| ");
        for column in 0..n {
            match board.square(Cell::new(row, column)) {
                Square::Empty => out.push(' '),
                Square::Occupied(player) => out.push(player.symbol()),
            }
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
