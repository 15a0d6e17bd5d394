//! Agent backed by the alpha-beta search engine

use crate::{
    Result,
    ports::Agent,
    search::{SearchEngine, SearchStats},
    tictactoe::{Board, Mark, Move},
};

/// Optimal player: every decision is a full alpha-beta search
pub struct MinimaxAgent {
    name: String,
    engine: Option<SearchEngine>,
}

impl MinimaxAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            engine: None,
        }
    }

    /// Engine for `mark`, rebuilt when the agent switches sides
    fn engine_for(&mut self, mark: Mark) -> &mut SearchEngine {
        if self.engine.as_ref().is_some_and(|e| e.agent() != mark) {
            self.engine = None;
        }
        self.engine.get_or_insert_with(|| SearchEngine::new(mark))
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<Move> {
        self.engine_for(mark).find_best_move(board)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_search(&self) -> Option<SearchStats> {
        self.engine.as_ref().map(SearchEngine::stats)
    }
}
