//! noughts CLI - perfect-play tic-tac-toe
//!
//! This CLI provides:
//! - An interactive console game against the minimax engine
//! - Best-move queries for arbitrary positions
//! - Engine-versus-opponent series

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{
    commands::{best_move, matchup, play},
    config::AppConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe against an alpha-beta minimax engine", long_about = None)]
struct Cli {
    /// JSON config file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log search and match events at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine in the terminal
    Play(play::PlayArgs),

    /// Compute the optimal move for a position
    BestMove(best_move::BestMoveArgs),

    /// Play the engine against an opponent for a number of games
    Match(matchup::MatchArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    init_tracing(cli.verbose || config.common.verbose);

    match cli.command {
        Commands::Play(args) => play::execute(args, config.play),
        Commands::BestMove(args) => best_move::execute(args),
        Commands::Match(args) => matchup::execute(args, config.matches, config.common),
    }
}
