//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, Cell, Mark, Move, Outcome};
pub use game::{Game, PlayedMove};
pub use lines::{LineAnalyzer, WINNING_LINES};
