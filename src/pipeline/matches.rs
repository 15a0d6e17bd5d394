//! Match runner: two agents alternating moves on one board

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    ports::Agent,
    tictactoe::{Game, Mark, Outcome},
};

/// Play `game` to completion, asking `x` and `o` for moves in turn.
///
/// Every move goes through [`Game::play`], so an agent that returns an
/// illegal move aborts the game with [`crate::Error::InvalidMove`].
pub fn play_out(game: &mut Game, x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Outcome> {
    while !game.is_over() {
        let mark = game.to_move();
        let board = game.board()?;
        let agent: &mut dyn Agent = match mark {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };

        let mv = agent.select_move(&board, mark)?;
        debug!(agent = agent.name(), %mark, %mv, "move played");
        game.play(mv)?;
    }

    Ok(game.outcome)
}

/// Play one game from the empty board
pub fn play_game(x: &mut dyn Agent, o: &mut dyn Agent, first: Mark) -> Result<Game> {
    let mut game = Game::new(first);
    play_out(&mut game, x, o)?;
    Ok(game)
}

/// Aggregate of a series of games between the same two agents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub x_name: String,
    pub o_name: String,
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SeriesResult {
    pub fn new(x_name: &str, o_name: &str) -> Self {
        Self {
            x_name: x_name.to_string(),
            o_name: o_name.to_string(),
            ..Self::default()
        }
    }

    /// Record a finished game
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        self.games += 1;
    }

    /// Fraction of games won by `mark`
    pub fn win_rate(&self, mark: Mark) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        };
        wins as f64 / self.games as f64
    }
}

/// Repeated games between two fixed agents
pub struct MatchSeries<'a> {
    x: &'a mut dyn Agent,
    o: &'a mut dyn Agent,
    first: Mark,
    seed: Option<u64>,
}

impl<'a> MatchSeries<'a> {
    pub fn new(x: &'a mut dyn Agent, o: &'a mut dyn Agent) -> Self {
        Self {
            x,
            o,
            first: Mark::X,
            seed: None,
        }
    }

    /// Configure which mark makes the first move in every game
    pub fn with_first(mut self, first: Mark) -> Self {
        self.first = first;
        self
    }

    /// Reseed both agents before each game (`seed + game index`, O gets an offset)
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Play `games` games and tally the results
    pub fn run(&mut self, games: usize) -> Result<SeriesResult> {
        self.run_with(games, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `on_game` with the index and record
    /// of each finished game
    pub fn run_with<F>(&mut self, games: usize, mut on_game: F) -> Result<SeriesResult>
    where
        F: FnMut(usize, &Game),
    {
        let mut result = SeriesResult::new(self.x.name(), self.o.name());

        for index in 0..games {
            if let Some(seed) = self.seed {
                let game_seed = seed.wrapping_add(index as u64);
                self.x.set_rng_seed(game_seed)?;
                self.o.set_rng_seed(game_seed.wrapping_add(1 << 32))?;
            }

            let game = play_game(&mut *self.x, &mut *self.o, self.first)?;
            result.record(game.outcome);
            on_game(index, &game);
        }

        info!(
            x = %result.x_name,
            o = %result.o_name,
            games = result.games,
            x_wins = result.x_wins,
            o_wins = result.o_wins,
            draws = result.draws,
            "series finished"
        );
        Ok(result)
    }
}
