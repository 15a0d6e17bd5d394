//! Match command - the engine against a baseline over many games

use std::io::{self, Write};

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    adapters::{MinimaxAgent, RandomAgent},
    cli::{
        config::{CommonConfig, MatchConfig},
        output::{create_match_progress, print_kv, print_section},
    },
    pipeline::{MatchSeries, SeriesResult},
    ports::Agent,
    tictactoe::Mark,
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play the engine against an opponent for a number of games")]
pub struct MatchArgs {
    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Opponent type (random, minimax)
    #[arg(long, short = 'o')]
    pub opponent: Option<String>,

    /// Mark played by the engine (`x` or `o`)
    #[arg(long)]
    pub engine: Option<Mark>,

    /// Mark that opens every game (`x` or `o`)
    #[arg(long)]
    pub first: Option<Mark>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl MatchArgs {
    /// Apply command-line overrides on top of the file configuration
    pub fn resolve(
        &self,
        mut config: MatchConfig,
        mut common: CommonConfig,
    ) -> Result<(MatchConfig, CommonConfig)> {
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(opponent) = &self.opponent {
            config.opponent = opponent.clone();
        }
        if let Some(engine) = self.engine {
            config.engine = engine;
        }
        if let Some(first) = self.first {
            config.first = first;
        }
        if self.seed.is_some() {
            common.seed = self.seed;
        }
        if self.no_progress || self.json {
            common.progress = false;
        }

        if config.games == 0 {
            return Err(anyhow!("--games must be at least 1"));
        }
        Ok((config, common))
    }
}

/// Build an opponent from its config name
pub fn create_opponent(kind: &str, seed: Option<u64>) -> Result<Box<dyn Agent>> {
    match kind.trim().to_lowercase().as_str() {
        "random" => Ok(match seed {
            Some(seed) => Box::new(RandomAgent::with_seed("Random", seed)),
            None => Box::new(RandomAgent::new("Random")),
        }),
        "minimax" | "optimal" => Ok(Box::new(MinimaxAgent::new("Minimax-opponent"))),
        other => Err(anyhow!(
            "Unknown opponent type: '{other}'. Supported: random, minimax"
        )),
    }
}

/// Run the series described by the resolved configuration
pub fn run_series(config: &MatchConfig, common: &CommonConfig) -> Result<SeriesResult> {
    let mut engine = MinimaxAgent::new("Minimax");
    let mut opponent = create_opponent(&config.opponent, common.seed)?;

    let (x, o): (&mut dyn Agent, &mut dyn Agent) = match config.engine {
        Mark::X => (&mut engine, opponent.as_mut()),
        Mark::O => (opponent.as_mut(), &mut engine),
    };

    let progress = if common.progress {
        Some(create_match_progress(config.games as u64)?)
    } else {
        None
    };

    let mut series = MatchSeries::new(x, o)
        .with_first(config.first)
        .with_seed(common.seed);
    let result = series.run_with(config.games, |_, game| {
        if let Some(pb) = &progress {
            pb.set_message(format!("last: {:?}", game.outcome));
            pb.inc(1);
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    Ok(result)
}

pub fn execute(args: MatchArgs, config: MatchConfig, common: CommonConfig) -> Result<()> {
    let (config, common) = args.resolve(config, common)?;
    let result = run_series(&config, &common)?;
    let mut out = io::stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &result)?;
        writeln!(out)?;
        return Ok(());
    }

    print_section(
        &mut out,
        &format!("{} (X) vs {} (O)", result.x_name, result.o_name),
    )?;
    print_kv(&mut out, "Games", &result.games.to_string())?;
    print_kv(&mut out, "First to move", &config.first.to_string())?;
    print_kv(
        &mut out,
        "X wins",
        &format!("{} ({:.1}%)", result.x_wins, result.win_rate(Mark::X) * 100.0),
    )?;
    print_kv(
        &mut out,
        "O wins",
        &format!("{} ({:.1}%)", result.o_wins, result.win_rate(Mark::O) * 100.0),
    )?;
    print_kv(&mut out, "Draws", &result.draws.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(seed: u64) -> CommonConfig {
        CommonConfig {
            seed: Some(seed),
            progress: false,
            verbose: false,
        }
    }

    #[test]
    fn test_engine_never_loses_to_random() {
        for engine in [Mark::X, Mark::O] {
            let config = MatchConfig {
                games: 20,
                engine,
                ..MatchConfig::default()
            };
            let result = run_series(&config, &quiet(3)).unwrap();

            assert_eq!(result.games, 20);
            let engine_losses = match engine {
                Mark::X => result.o_wins,
                Mark::O => result.x_wins,
            };
            assert_eq!(engine_losses, 0, "engine as {engine} lost: {result:?}");
        }
    }

    #[test]
    fn test_minimax_mirror_always_draws() {
        let config = MatchConfig {
            games: 2,
            opponent: "minimax".to_string(),
            ..MatchConfig::default()
        };
        let result = run_series(&config, &quiet(0)).unwrap();
        assert_eq!(result.draws, 2);
    }

    #[test]
    fn test_unknown_opponent() {
        let err = create_opponent("alphabeta", None).err().unwrap();
        assert!(err.to_string().contains("Unknown opponent type"));
    }

    #[test]
    fn test_resolve_overrides() {
        let args = MatchArgs {
            games: Some(7),
            seed: Some(11),
            json: true,
            ..MatchArgs::default()
        };
        let (config, common) = args
            .resolve(MatchConfig::default(), CommonConfig::default())
            .unwrap();
        assert_eq!(config.games, 7);
        assert_eq!(common.seed, Some(11));
        assert!(!common.progress);

        let zero = MatchArgs {
            games: Some(0),
            ..MatchArgs::default()
        };
        assert!(
            zero.resolve(MatchConfig::default(), CommonConfig::default())
                .is_err()
        );
    }
}
