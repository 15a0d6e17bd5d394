//! Agent port - abstraction for anything that chooses moves
//!
//! The match runner only talks to this trait, so the search engine and the
//! random baseline are interchangeable.

use crate::{
    Result,
    search::SearchStats,
    tictactoe::{Board, Mark, Move},
};

/// Agent trait - unified interface for every kind of player
///
/// # Examples
///
/// ```
/// use noughts::{
///     adapters::MinimaxAgent,
///     ports::Agent,
///     tictactoe::{Board, Mark, Move},
/// };
///
/// let mut agent = MinimaxAgent::new("engine");
/// let mut board = Board::new();
/// assert!(board.apply_move(0, 0, Mark::X));
/// assert!(board.apply_move(1, 1, Mark::O));
/// assert!(board.apply_move(0, 1, Mark::X));
///
/// // O has to block the top row
/// assert_eq!(agent.select_move(&board, Mark::O).unwrap(), Move::new(0, 2));
/// ```
pub trait Agent: Send {
    /// Select a move for `mark` on the given board.
    ///
    /// The returned move must be valid on `board`; callers treat anything
    /// else as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available (decided or full
    /// board) or the agent cannot produce a move at all.
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<Move>;

    /// Get the agent's name.
    ///
    /// Used for identification in match summaries and logging.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Deterministic agents can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }

    /// Statistics of the agent's last search, for agents that search.
    fn last_search(&self) -> Option<SearchStats> {
        None
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<Move> {
        (**self).select_move(board, mark)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        (**self).set_rng_seed(seed)
    }

    fn last_search(&self) -> Option<SearchStats> {
        (**self).last_search()
    }
}
