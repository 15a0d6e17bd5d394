//! Plain minimax without pruning
//!
//! Visits the whole game tree below a position. Too slow to play with from
//! an empty board on every turn, but it gives the reference values that
//! alpha-beta must reproduce.

use super::engine::{NEG_INF, POS_INF, terminal_score};
use crate::tictactoe::{Board, Mark, Move};

/// Full-width minimax value of `board` for `agent`, with the same scoring
/// and depth convention as [`SearchEngine::minimax`](super::SearchEngine::minimax).
pub fn minimax_value(board: &Board, agent: Mark, depth: i32, maximizing: bool) -> i32 {
    if board.is_terminal() {
        return terminal_score(board, agent, depth);
    }

    let mark = if maximizing { agent } else { agent.opponent() };
    let children = board.available_moves().into_iter().filter_map(|mv| {
        let mut child = *board;
        child
            .apply_move(mv.row, mv.col, mark)
            .then(|| minimax_value(&child, agent, depth + 1, !maximizing))
    });

    if maximizing {
        children.fold(NEG_INF, i32::max)
    } else {
        children.fold(POS_INF, i32::min)
    }
}

/// Reference value of every root move, scored like
/// [`SearchEngine::evaluate_moves`](super::SearchEngine::evaluate_moves)
pub fn root_values(board: &Board, agent: Mark) -> Vec<(Move, i32)> {
    if board.is_terminal() {
        return Vec::new();
    }

    board
        .available_moves()
        .into_iter()
        .filter_map(|mv| {
            let child = board.with_move(mv, agent).ok()?;
            Some((mv, minimax_value(&child, agent, 0, false)))
        })
        .collect()
}

/// Number of nodes a full-width search from `board` visits
pub fn tree_size(board: &Board, mark: Mark) -> u64 {
    if board.is_terminal() {
        return 1;
    }

    1 + board
        .available_moves()
        .into_iter()
        .filter_map(|mv| board.with_move(mv, mark).ok())
        .map(|child| tree_size(&child, mark.opponent()))
        .sum::<u64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_draw_from_empty_board() {
        let values = root_values(&Board::new(), Mark::X);
        assert_eq!(values.len(), 9);
        assert!(values.iter().all(|&(_, value)| value == 0));
    }

    #[test]
    fn test_tree_size_from_empty_board() {
        // Well-known count of nodes in the complete Tic-Tac-Toe game tree
        assert_eq!(tree_size(&Board::new(), Mark::X), 549_946);
    }

    #[test]
    fn test_terminal_root_has_no_values() {
        let won: Board = "XXX/OO./...".parse().unwrap();
        assert!(root_values(&won, Mark::O).is_empty());
        assert_eq!(tree_size(&won, Mark::O), 1);
    }
}
