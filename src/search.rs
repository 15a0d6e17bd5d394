//! Game-tree search
//!
//! [`SearchEngine`] runs minimax with alpha-beta pruning over board copies;
//! [`exhaustive`] holds the unpruned reference search.

pub mod engine;
pub mod exhaustive;

pub use engine::{SearchEngine, SearchStats, WIN_SCORE, depth_adjusted, terminal_score};

use crate::{
    Result,
    tictactoe::{Board, Mark, Move},
};

/// One-shot search: the optimal move for `agent` playing against `opponent`.
///
/// # Errors
///
/// Returns [`crate::Error::NoLegalMoves`] on a decided or full board and
/// [`crate::Error::InvalidConfiguration`] if both marks are the same.
pub fn find_best_move(board: &Board, agent: Mark, opponent: Mark) -> Result<Move> {
    SearchEngine::with_marks(agent, opponent)?.find_best_move(board)
}
