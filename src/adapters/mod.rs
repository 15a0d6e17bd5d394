//! Adapters implementing domain ports.
//!
//! Agents that plug into the [`Agent`](crate::ports::Agent) port.

pub mod minimax_agent;
pub mod random_agent;

pub use minimax_agent::MinimaxAgent;
pub use random_agent::RandomAgent;
