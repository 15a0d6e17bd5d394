//! Perfect-play tic-tac-toe
//!
//! This crate provides:
//! - A 3x3 board model with move validation and outcome detection
//! - A minimax search engine with alpha-beta pruning and node counters
//! - Agents (minimax, random) behind a common port and a match runner
//! - The CLI behind the `noughts` binary

pub mod adapters;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{SearchEngine, SearchStats, find_best_move};
pub use tictactoe::{Board, Cell, Game, Mark, Move, Outcome};
