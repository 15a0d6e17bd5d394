//! Game record with move history

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark, Move, Outcome};

/// A move together with the mark that played it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub mark: Mark,
}

/// A complete game with history
///
/// The board is never stored; it is rebuilt from `initial` and `moves` so a
/// deserialized record cannot disagree with its own history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub first: Mark,
    pub moves: Vec<PlayedMove>,
    pub outcome: Outcome,
}

impl Game {
    /// Create a new game on an empty board
    pub fn new(first: Mark) -> Self {
        Self::from_position(Board::new(), first)
    }

    /// Start recording from an arbitrary position with `first` to move
    pub fn from_position(initial: Board, first: Mark) -> Self {
        Game {
            initial,
            first,
            moves: Vec::new(),
            outcome: initial.outcome(),
        }
    }

    /// Mark whose turn it is
    pub fn to_move(&self) -> Mark {
        match self.moves.last() {
            Some(last) => last.mark.opponent(),
            None => self.first,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game is decided and
    /// [`crate::Error::InvalidMove`] for an off-board or occupied cell.
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let mark = self.to_move();
        let next = self.board()?.with_move(mv, mark)?;

        self.moves.push(PlayedMove { mv, mark });
        self.outcome = next.outcome();
        Ok(())
    }

    /// Play a move on behalf of `mark`, rejecting it if it is not that mark's turn
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfTurn`] in addition to the errors of [`Game::play`].
    pub fn play_as(&mut self, mv: Move, mark: Mark) -> Result<(), crate::Error> {
        let expected = self.to_move();
        if mark != expected {
            return Err(crate::Error::OutOfTurn {
                expected: expected.to_char(),
                got: mark.to_char(),
            });
        }
        self.play(mv)
    }

    /// Replay moves up to a given index (exclusive)
    fn replay_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut board = self.initial;
        for played in self.moves.iter().take(end_index) {
            board = board.with_move(played.mv, played.mark)?;
        }
        Ok(board)
    }

    /// Get current board
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the position
    /// it was played in. This indicates corrupted game data.
    pub fn board(&self) -> Result<Board, crate::Error> {
        self.replay_until(self.moves.len())
    }

    /// Every board from the initial position to the current one
    ///
    /// # Errors
    ///
    /// Same as [`Game::board`].
    pub fn board_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        boards.push(board);

        for played in &self.moves {
            board = board.with_move(played.mv, played.mark)?;
            boards.push(board);
        }

        Ok(boards)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}
