//! Game-playing pipeline
//!
//! Runs agents against each other through the [`Agent`] port and records
//! the resulting games.

pub mod matches;

pub use matches::{MatchSeries, SeriesResult, play_game, play_out};

pub use crate::ports::Agent;
