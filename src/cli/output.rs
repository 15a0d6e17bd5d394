//! Output formatting and progress bars for CLI

use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressStyle};

use crate::search::SearchStats;

/// Create a progress bar for a series of games
pub fn create_match_progress(total_games: u64) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(50))
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(out: &mut impl Write, key: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {:20} {}", format!("{key}:"), value)
}

/// Print the counters of one search
pub fn print_search_stats(out: &mut impl Write, stats: &SearchStats) -> io::Result<()> {
    print_kv(out, "Nodes explored", &format_number(stats.nodes_explored))?;
    print_kv(out, "Nodes pruned", &format_number(stats.nodes_pruned))?;
    let value = stats
        .best_value
        .map_or_else(|| "-".to_string(), |v| v.to_string());
    print_kv(out, "Best move value", &value)
}
