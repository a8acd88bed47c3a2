//! Board state and core domain types.

use derive_more::{Display, Error};

/// Player mark. X moves first on an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Player {
    /// The X mark.
    #[display("X")]
    X,
    /// The O mark.
    #[display("O")]
    O,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    /// No mark yet.
    Empty,
    /// Marked by a player.
    Occupied(Player),
}

/// Zero-indexed (row, column) coordinate. The user boundary is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub column: usize,
}

impl Cell {
    /// Creates a cell coordinate.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Rejected move.
///
/// The `Display` strings are the console messages shown before re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinate outside `[1, N]` at the user boundary.
    #[display("Coordinates should be from 1 to {_0}!")]
    OutOfRange(#[error(not(source))] usize),
    /// Target square already carries a mark.
    #[display("This cell is occupied! Choose another one!")]
    CellOccupied,
}

/// Rejected initial board line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The line does not hold exactly N² cells.
    #[display("The board should be {expected} cells!")]
    WrongLength {
        /// N² for the requested board size.
        expected: usize,
        /// Number of characters actually supplied.
        actual: usize,
    },
    /// A character other than `_`, `X`, or `O`.
    #[display("Cells should be _, X or O!")]
    BadCell(#[error(not(source))] char),
}

/// Verdict computed from the board after a move.
///
/// The `Display` strings are the exact console literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Outcome {
    /// Moves remain and no line is complete.
    #[display("Game not finished")]
    Running,
    /// Full board without a completed line.
    #[display("Draw")]
    Draw,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Player),
}

/// N×N grid with a move counter. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
    moves: usize,
}

impl Board {
    /// Creates an empty board of the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
            moves: 0,
        }
    }

    /// Parses a board from one flat row-major line of `_XO` characters.
    ///
    /// The move counter is recovered from the number of occupied squares, so
    /// a parsed board carries its own turn order (see [`Board::next_player`]).
    pub fn parse(size: usize, line: &str) -> Result<Self, ParseBoardError> {
        let line = line.trim();
        let expected = size * size;
        let actual = line.chars().count();
        if actual != expected {
            return Err(ParseBoardError::WrongLength { expected, actual });
        }

        let mut squares = Vec::with_capacity(expected);
        for symbol in line.chars() {
            squares.push(match symbol {
                '_' => Square::Empty,
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                other => return Err(ParseBoardError::BadCell(other)),
            });
        }

        let moves = squares.iter().filter(|&&s| s != Square::Empty).count();
        Ok(Self {
            size,
            squares,
            moves,
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of marks placed so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// The square at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn square(&self, cell: Cell) -> Square {
        self.squares[self.index(cell)]
    }

    /// Whether `cell` is in bounds and unmarked.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.square(cell) == Square::Empty
    }

    /// Whether every square is occupied.
    pub fn is_full(&self) -> bool {
        self.moves == self.squares.len()
    }

    /// Side to move, derived from symbol counts: more X than O means O is
    /// next, otherwise X. Never stored separately, so turn order is always
    /// recoverable from board state alone. An over-played board (counts
    /// differing by more than one) gives undefined attribution.
    pub fn next_player(&self) -> Player {
        let mut x = 0usize;
        let mut o = 0usize;
        for &square in &self.squares {
            match square {
                Square::Occupied(Player::X) => x += 1,
                Square::Occupied(Player::O) => o += 1,
                Square::Empty => {}
            }
        }
        if x > o { Player::O } else { Player::X }
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        for row in 0..self.size {
            for column in 0..self.size {
                let cell = Cell::new(row, column);
                if self.square(cell) == Square::Empty {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    /// Checks `cell` against the current board without mutating it.
    pub fn validate_move(&self, cell: Cell) -> Result<(), MoveError> {
        if !self.in_bounds(cell) {
            return Err(MoveError::OutOfRange(self.size));
        }
        if self.square(cell) != Square::Empty {
            return Err(MoveError::CellOccupied);
        }
        Ok(())
    }

    /// Places `player` at `cell` and increments the move counter.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the coordinates are out of range or the
    /// target square is occupied.
    pub fn apply_move(&mut self, cell: Cell, player: Player) -> Result<(), MoveError> {
        self.validate_move(cell)?;
        self.place(cell, player);
        Ok(())
    }

    /// Unchecked placement used by the search probes.
    pub(crate) fn place(&mut self, cell: Cell, player: Player) {
        let index = self.index(cell);
        self.squares[index] = Square::Occupied(player);
        self.moves += 1;
    }

    /// Rolls back a probe placement.
    pub(crate) fn clear(&mut self, cell: Cell) {
        let index = self.index(cell);
        self.squares[index] = Square::Empty;
        self.moves -= 1;
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.column < self.size
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.column
    }
}
