//! Play command - interactive console game against the search engine

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::{
    adapters::MinimaxAgent,
    cli::{
        config::{FirstTurn, PlayConfig},
        output::{print_search_stats, print_section},
    },
    ports::Agent,
    tictactoe::{Board, Game, Mark, Move, Outcome},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play against the engine in the terminal")]
pub struct PlayArgs {
    /// Who moves first (asked before each game when omitted)
    #[arg(long, value_enum)]
    pub first: Option<FirstTurn>,

    /// Mark you play (`x` or `o`); the engine takes the other one
    #[arg(long)]
    pub human: Option<Mark>,

    /// Hide node counts after engine moves
    #[arg(long)]
    pub quiet: bool,
}

impl PlayArgs {
    /// Apply command-line overrides on top of the file configuration
    pub fn resolve(&self, mut config: PlayConfig) -> PlayConfig {
        if let Some(first) = self.first {
            config.first = Some(first);
        }
        if let Some(human) = self.human {
            config.human = human;
        }
        if self.quiet {
            config.show_stats = false;
        }
        config
    }
}

/// Tally of an interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games: usize,
    pub human_wins: usize,
    pub engine_wins: usize,
    pub draws: usize,
}

pub fn execute(args: PlayArgs, config: PlayConfig) -> Result<()> {
    let config = args.resolve(config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let summary = run_session(&mut input, &mut output, &config)?;
    info!(
        games = summary.games,
        human_wins = summary.human_wins,
        engine_wins = summary.engine_wins,
        draws = summary.draws,
        "session finished"
    );
    Ok(())
}

/// Run games until the player declines a rematch or input ends
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &PlayConfig,
) -> Result<SessionSummary> {
    let human = config.human;
    let engine_mark = human.opponent();
    let mut summary = SessionSummary::default();

    print_section(out, "Welcome to Tic-Tac-Toe!")?;
    writeln!(out, "You are {human} and the minimax engine is {engine_mark}")?;
    writeln!(out, "Enter your moves as 'row col' (e.g., '0 1' for top middle)")?;

    loop {
        let first = match config.first {
            Some(first) => first,
            None => match ask_first_turn(input, out)? {
                Some(first) => first,
                None => break,
            },
        };

        let Some(game) = play_one_game(input, out, config, first)? else {
            break;
        };

        summary.games += 1;
        let banner = match game.outcome {
            Outcome::Win(mark) if mark == human => {
                summary.human_wins += 1;
                "Congratulations! You won!"
            }
            Outcome::Win(_) => {
                summary.engine_wins += 1;
                "The engine wins! Better luck next time!"
            }
            _ => {
                summary.draws += 1;
                "It's a draw!"
            }
        };
        print_section(out, banner)?;

        match prompt(input, out, "\nPlay again? (y/n): ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(summary)
}

/// Play a single game; `None` when input ends mid-game
fn play_one_game<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &PlayConfig,
    first: FirstTurn,
) -> Result<Option<Game>> {
    let human = config.human;
    let engine_mark = human.opponent();
    let mut engine = MinimaxAgent::new("Minimax");

    let first_mark = match first {
        FirstTurn::Human => human,
        FirstTurn::Engine => engine_mark,
    };
    let mut board = Board::new();
    let mut game = Game::new(first_mark);

    while !board.is_terminal() {
        writeln!(out, "\n{board}")?;

        let mv = if game.to_move() == human {
            writeln!(out, "Your turn ({human})")?;
            match read_human_move(input, out, &board)? {
                Some(mv) => mv,
                None => return Ok(None),
            }
        } else {
            writeln!(out, "Engine's turn ({engine_mark})")?;
            let mv = engine
                .select_move(&board, engine_mark)
                .context("engine failed to choose a move")?;
            if config.show_stats
                && let Some(stats) = engine.last_search()
            {
                print_search_stats(out, &stats)?;
            }
            writeln!(out, "Engine placed {engine_mark} at position {mv}")?;
            mv
        };

        let mark = game.to_move();
        if !board.apply_move(mv.row, mv.col, mark) {
            anyhow::bail!("move {mv} was accepted but could not be applied");
        }
        game.play_as(mv, mark)?;
    }

    writeln!(out, "\n{board}")?;
    Ok(Some(game))
}

/// Prompt until the human enters a legal move
fn read_human_move<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    board: &Board,
) -> Result<Option<Move>> {
    loop {
        let Some(line) = prompt(input, out, "Enter move (row col): ")? else {
            return Ok(None);
        };

        match Move::parse(&line) {
            Ok(mv) if board.is_valid_move(mv.row, mv.col) => return Ok(Some(mv)),
            Ok(_) => writeln!(out, "Invalid move! Try again.")?,
            Err(e) => writeln!(out, "Invalid input! {e}")?,
        }
    }
}

fn ask_first_turn<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<FirstTurn>> {
    loop {
        let Some(answer) =
            prompt(input, out, "\nWho goes first? (h for human, a for the engine): ")?
        else {
            return Ok(None);
        };

        match answer.to_ascii_lowercase().as_str() {
            "h" => return Ok(Some(FirstTurn::Human)),
            "a" | "e" => return Ok(Some(FirstTurn::Engine)),
            _ => writeln!(out, "Invalid input. Please enter 'h' or 'a'")?,
        }
    }
}

/// Write `message`, read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(script: &str, config: &PlayConfig) -> (SessionSummary, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let summary = run_session(&mut input, &mut out, config).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn engine_punishes_careless_human() {
        // Engine O answers the corner with the centre, blocks twice and
        // completes the middle column. "2 0" is rejected as occupied.
        let config = PlayConfig {
            first: Some(FirstTurn::Human),
            ..PlayConfig::default()
        };
        let (summary, text) = run("0 0\n1 0\n2 0\n0 2\n2 2\nn\n", &config);

        assert_eq!(summary.games, 1);
        assert_eq!(summary.engine_wins, 1);
        assert!(text.contains("Invalid move! Try again."));
        assert!(text.contains("The engine wins!"));
        assert!(text.contains("Nodes explored"));
        assert!(text.contains("Thanks for playing!"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let config = PlayConfig {
            first: Some(FirstTurn::Human),
            show_stats: false,
            ..PlayConfig::default()
        };
        // Garbage, out of range, then a real move; input ends mid-game.
        let (summary, text) = run("hello\n3 3\n1 1\n1 1\n", &config);

        assert_eq!(summary.games, 0);
        assert!(text.contains("Invalid input!"));
        assert!(text.contains("Invalid move! Try again."));
        assert!(!text.contains("Nodes explored"));
    }

    #[test]
    fn asks_who_goes_first() {
        let config = PlayConfig::default();
        // Bad answer, then the engine opens; input ends at the human's turn.
        let (summary, text) = run("z\na\n", &config);

        assert_eq!(summary.games, 0);
        assert!(text.contains("Please enter 'h' or 'a'"));
        // Empty board: first of the equally valued cells in row-major order
        assert!(text.contains("Engine placed O at position (0, 0)"));
    }

    #[test]
    fn resolve_prefers_flags() {
        let args = PlayArgs {
            first: Some(FirstTurn::Engine),
            human: Some(Mark::O),
            quiet: true,
        };
        let config = args.resolve(PlayConfig::default());
        assert_eq!(config.first, Some(FirstTurn::Engine));
        assert_eq!(config.human, Mark::O);
        assert!(!config.show_stats);
    }
}
