//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Mark};

/// Winning line indices on the 3x3 board, in checking order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Return the mark owning the first complete line, scanning rows, then
    /// columns, then diagonals.
    pub fn first_complete_line(cells: &[Cell; 9]) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|line| Self::line_owner(cells, line))
    }

    fn line_owner(cells: &[Cell; 9], line: &[usize; 3]) -> Option<Mark> {
        let [a, b, c] = *line;
        match cells[a].mark() {
            Some(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
            _ => None,
        }
    }
}
