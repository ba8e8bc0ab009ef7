//! End-to-end driver: balance a problem once, then run and score every
//! configured method on it.

mod config;
mod runner;

pub use config::SolverConfig;
pub use runner::{solve, MethodResult, SolveReport};
