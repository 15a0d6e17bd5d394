//! Best-move command - solve a single position

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{print_kv, print_search_stats, print_section},
    search::{SearchEngine, SearchStats},
    tictactoe::{Board, Mark, Move},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a position")]
pub struct BestMoveArgs {
    /// Board as nine row-major cells, e.g. "XX./.O./..." ('.' is empty)
    pub board: String,

    /// Mark to find a move for (defaults to the side to move by piece count)
    #[arg(long)]
    pub agent: Option<Mark>,

    /// Also list the value of every legal move
    #[arg(long)]
    pub all: bool,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MoveValue {
    #[serde(rename = "move")]
    mv: Move,
    value: i32,
}

/// Result of solving one position
#[derive(Debug, Serialize)]
pub struct BestMoveReport {
    pub board: String,
    pub agent: Mark,
    #[serde(rename = "move")]
    pub mv: Move,
    pub stats: SearchStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<Vec<MoveValue>>,
}

/// Solve the position described by `args`
pub fn solve(args: &BestMoveArgs) -> Result<BestMoveReport> {
    let board: Board = args
        .board
        .parse()
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    let agent = args.agent.unwrap_or_else(|| board.next_mark());

    let mut engine = SearchEngine::new(agent);
    let mv = engine
        .find_best_move(&board)
        .with_context(|| format!("no move to find on board '{}'", board.encode()))?;
    let stats = engine.stats();

    let moves = if args.all {
        let values = engine.evaluate_moves(&board)?;
        Some(
            values
                .into_iter()
                .map(|(mv, value)| MoveValue { mv, value })
                .collect(),
        )
    } else {
        None
    };

    Ok(BestMoveReport {
        board: board.encode(),
        agent,
        mv,
        stats,
        moves,
    })
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let report = solve(&args)?;
    let mut out = io::stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    let board: Board = report.board.parse()?;
    print_section(&mut out, &format!("Best move for {}", report.agent))?;
    writeln!(out, "{board}")?;
    print_kv(&mut out, "Best move", &report.mv.to_string())?;
    print_search_stats(&mut out, &report.stats)?;

    if let Some(moves) = &report.moves {
        writeln!(out, "\n  All moves:")?;
        for entry in moves {
            print_kv(&mut out, &entry.mv.to_string(), &entry.value.to_string())?;
        }
    }

    Ok(())
}
