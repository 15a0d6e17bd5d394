//! CLI infrastructure for the noughts engine
//!
//! This module provides the command-line interface for playing against the
//! engine, solving single positions and running engine-versus-opponent series.

pub mod commands;
pub mod config;
pub mod output;
