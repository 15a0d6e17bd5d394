//! Uniform random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Board, Mark, Move},
};

/// Plays a uniformly random legal move
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _mark: Mark) -> Result<Move> {
        if board.is_terminal() {
            return Err(Error::NoLegalMoves);
        }
        let moves = board.available_moves();
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_picks_empty_cell() {
        let mut agent = RandomAgent::with_seed("Random", 7);
        let board: Board = "XOX/OXO/...".parse().unwrap();

        for _ in 0..20 {
            let mv = agent.select_move(&board, Mark::X).unwrap();
            assert!(board.is_valid_move(mv.row, mv.col));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut a = RandomAgent::with_seed("A", 42);
        let mut b = RandomAgent::with_seed("B", 42);
        let board = Board::new();

        for _ in 0..10 {
            assert_eq!(
                a.select_move(&board, Mark::X).unwrap(),
                b.select_move(&board, Mark::X).unwrap()
            );
        }
    }

    #[test]
    fn test_random_agent_rejects_decided_board() {
        let mut agent = RandomAgent::with_seed("Random", 1);
        let won: Board = "XXX/OO./...".parse().unwrap();
        assert!(matches!(
            agent.select_move(&won, Mark::O),
            Err(Error::NoLegalMoves)
        ));
    }
}
