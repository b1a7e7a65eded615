//! Agents for the multi-armed bandit problem.
//!
//! An [`Agent`](agents::Agent) plays a fixed number of turns against an
//! [`Environment`](environments::Environment), balancing exploration of the arms against
//! exploitation of the best one it knows so far.

pub mod agents;
pub mod config;
pub mod environments;
pub mod errors;
mod rng;
pub mod simulation;
