//! Subcommands of the `noughts` binary

pub mod best_move;
pub mod matchup;
pub mod play;
