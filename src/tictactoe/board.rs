//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Side length of the board
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Mark::X),
            "o" => Ok(Mark::O),
            _ => Err(crate::Error::InvalidMark {
                input: s.to_string(),
            }),
        }
    }
}

/// A (row, column) cell address
///
/// Construction does not validate the coordinates; [`Board::is_valid_move`]
/// is the single place that decides whether a move can be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Build a move from a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Move::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Row-major cell index, or `None` when the coordinates are off the board
    pub fn index(self) -> Option<usize> {
        (self.row < BOARD_SIZE && self.col < BOARD_SIZE).then(|| self.row * BOARD_SIZE + self.col)
    }

    /// Parse console input of the form `"row col"` (a comma also separates).
    ///
    /// Only the shape of the input is checked here; whether the cell exists
    /// and is free is up to the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMoveInput`] when the input is not two
    /// non-negative integers.
    pub fn parse(input: &str) -> Result<Self, crate::Error> {
        let parts: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();

        let invalid = |reason: &str| crate::Error::InvalidMoveInput {
            input: input.trim().to_string(),
            reason: reason.to_string(),
        };

        if parts.len() != 2 {
            return Err(invalid("enter two numbers separated by a space"));
        }

        let row = parts[0]
            .parse::<usize>()
            .map_err(|_| invalid("row and column must be numbers (0-2)"))?;
        let col = parts[1]
            .parse::<usize>()
            .map_err(|_| invalid("row and column must be numbers (0-2)"))?;

        Ok(Move::new(row, col))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Status of a position, derived from the grid on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_decided(self) -> bool {
        self != Outcome::InProgress
    }

    /// Winner, if the game ended with a completed line
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

/// A 3x3 grid of cells
///
/// `Board` is `Copy` (nine bytes), so every copy is an independent state.
/// The board only enforces that a move lands on an existing empty cell;
/// turn order is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from row-major cells, without any count checks
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get the cell at (row, col), or `None` when off the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Move::new(row, col).index().map(|idx| self.cells[idx])
    }

    /// True iff both indices are in range and the cell is empty
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(Cell::Empty)
    }

    /// Place `mark` at (row, col).
    ///
    /// Returns `false` and leaves the board untouched when the move is not
    /// valid. Invalid input is an expected condition here, not an error.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if !self.is_valid_move(row, col) {
            return false;
        }
        self.cells[row * BOARD_SIZE + col] = mark.to_cell();
        true
    }

    /// Return a copy of the board with `mark` placed at `mv`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the cell is off the board or
    /// occupied.
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, mv: Move, mark: Mark) -> Result<Board, crate::Error> {
        let mut next = *self;
        if next.apply_move(mv.row, mv.col, mark) {
            Ok(next)
        } else {
            Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            })
        }
    }

    /// All empty cells in row-major order.
    ///
    /// This does not consult the outcome: a decided board with free cells
    /// still lists them.
    pub fn available_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .filter_map(|(idx, _)| Move::from_index(idx))
            .collect()
    }

    /// Rows, then columns, then diagonals; a full board without a line is a draw.
    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = LineAnalyzer::first_complete_line(&self.cells) {
            Outcome::Win(mark)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Mark> {
        self.outcome().winner()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Number of cells holding `mark`
    pub fn mark_count(&self, mark: Mark) -> usize {
        let target = mark.to_cell();
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// The mark expected to move next, inferred from piece counts.
    ///
    /// The side with fewer marks moves; on equal counts X moves, so a game
    /// opened by O is only told apart once O is a mark ahead.
    pub fn next_mark(&self) -> Mark {
        if self.mark_count(Mark::X) > self.mark_count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Compact single-line encoding, e.g. `XX.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Parse nine row-major cells. Whitespace, `/` and `|` are ignored, so
    /// `"XX./.O./..."` and `"XX. .O. ..."` both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let x_count = board.mark_count(Mark::X);
        let o_count = board.mark_count(Mark::O);
        if x_count.abs_diff(o_count) > 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0   1   2")?;
        for row in 0..BOARD_SIZE {
            let rendered: Vec<String> = (0..BOARD_SIZE)
                .map(|col| match self.cells[row * BOARD_SIZE + col] {
                    Cell::Empty => " ".to_string(),
                    cell => cell.to_char().to_string(),
                })
                .collect();
            writeln!(f, "{row}   {}", rendered.join(" | "))?;
            if row + 1 < BOARD_SIZE {
                writeln!(f, "   ---+---+---")?;
            }
        }
        Ok(())
    }
}
