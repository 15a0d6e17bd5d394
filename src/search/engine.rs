//! Minimax search with alpha-beta pruning

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Error, Result,
    tictactoe::{Board, Mark, Move, Outcome},
};

/// Raw score of a decided position for the side that won it
pub const WIN_SCORE: i32 = 10;

/// Stand-in for -∞; every real score lies in [-WIN_SCORE, WIN_SCORE]
pub(crate) const NEG_INF: i32 = i32::MIN;
/// Stand-in for +∞
pub(crate) const POS_INF: i32 = i32::MAX;

/// Shift a terminal score toward zero by the ply distance.
///
/// Wins lose a point per ply (sooner is better), losses gain one
/// (later is better), draws stay at zero.
pub fn depth_adjusted(score: i32, depth: i32) -> i32 {
    match score.cmp(&0) {
        std::cmp::Ordering::Greater => score - depth,
        std::cmp::Ordering::Less => score + depth,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Depth-adjusted score of a terminal board from `agent`'s point of view
pub fn terminal_score(board: &Board, agent: Mark, depth: i32) -> i32 {
    let raw = match board.outcome() {
        Outcome::Win(mark) if mark == agent => WIN_SCORE,
        Outcome::Win(_) => -WIN_SCORE,
        Outcome::Draw | Outcome::InProgress => 0,
    };
    depth_adjusted(raw, depth)
}

/// Counters captured by the most recent top-level search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes_explored: u64,
    pub nodes_pruned: u64,
    /// Value of the chosen move, `None` before the first search
    pub best_value: Option<i32>,
}

/// Alpha-beta minimax searcher for one side of the board
///
/// The engine owns its instrumentation counters, so independent engines can
/// search concurrently. Boards handed to it are only ever read; each branch
/// of the tree works on its own copy.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    agent: Mark,
    opponent: Mark,
    nodes_explored: u64,
    nodes_pruned: u64,
    best_value: Option<i32>,
}

impl SearchEngine {
    /// Engine maximizing for `agent` against its opposing mark
    pub fn new(agent: Mark) -> Self {
        SearchEngine {
            agent,
            opponent: agent.opponent(),
            nodes_explored: 0,
            nodes_pruned: 0,
            best_value: None,
        }
    }

    /// Engine for an explicit (agent, opponent) pairing
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if both sides use the same mark.
    pub fn with_marks(agent: Mark, opponent: Mark) -> Result<Self> {
        if agent == opponent {
            return Err(Error::InvalidConfiguration {
                message: format!("agent and opponent cannot both play {agent}"),
            });
        }
        Ok(SearchEngine {
            opponent,
            ..Self::new(agent)
        })
    }

    pub fn agent(&self) -> Mark {
        self.agent
    }

    pub fn opponent(&self) -> Mark {
        self.opponent
    }

    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    pub fn nodes_pruned(&self) -> u64 {
        self.nodes_pruned
    }

    /// Statistics of the last [`find_best_move`](Self::find_best_move) or
    /// [`evaluate_moves`](Self::evaluate_moves) call
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes_explored: self.nodes_explored,
            nodes_pruned: self.nodes_pruned,
            best_value: self.best_value,
        }
    }

    fn reset_counters(&mut self) {
        self.nodes_explored = 0;
        self.nodes_pruned = 0;
        self.best_value = None;
    }

    /// Score `board` with alpha-beta pruning.
    ///
    /// `depth` is the ply distance from the root, `maximizing` says whether
    /// the agent is the side to place the next mark. Only complete games end
    /// the recursion; the tree is small enough to search to the bottom.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_explored += 1;

        if board.is_terminal() {
            return terminal_score(board, self.agent, depth);
        }

        let mark = if maximizing { self.agent } else { self.opponent };
        let mut best = if maximizing { NEG_INF } else { POS_INF };

        for mv in board.available_moves() {
            let mut child = *board;
            let placed = child.apply_move(mv.row, mv.col, mark);
            debug_assert!(placed, "available move {mv} was rejected");

            let score = self.minimax(&child, depth + 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.nodes_pruned += 1;
                break;
            }
        }

        best
    }

    /// Value of every legal root move, in row-major order.
    ///
    /// Each candidate is searched with a fresh (-∞, +∞) window, so the values
    /// are exact rather than bounds. Counters are reset first and reflect the
    /// whole call afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] if the board is already decided or full.
    pub fn evaluate_moves(&mut self, board: &Board) -> Result<Vec<(Move, i32)>> {
        self.reset_counters();

        if board.is_terminal() {
            return Err(Error::NoLegalMoves);
        }

        let mut values = Vec::new();
        for mv in board.available_moves() {
            let child = board.with_move(mv, self.agent)?;
            let value = self.minimax(&child, 0, NEG_INF, POS_INF, false);
            trace!(%mv, value, "root move evaluated");
            values.push((mv, value));
        }

        self.best_value = values.iter().map(|&(_, value)| value).max();
        Ok(values)
    }

    /// The optimal move for the agent, assuming the opponent also plays
    /// optimally.
    ///
    /// Among equally valued moves the first in row-major order wins, so the
    /// result is reproducible. The caller's board is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] if the board is already decided or
    /// full. Check [`Board::is_terminal`] first to avoid it.
    pub fn find_best_move(&mut self, board: &Board) -> Result<Move> {
        let mut best: Option<(Move, i32)> = None;
        for (mv, value) in self.evaluate_moves(board)? {
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        let (mv, value) = best.ok_or(Error::NoLegalMoves)?;
        debug!(
            agent = %self.agent,
            board = %board.encode(),
            %mv,
            value,
            nodes_explored = self.nodes_explored,
            nodes_pruned = self.nodes_pruned,
            "best move selected"
        );
        Ok(mv)
    }
}
