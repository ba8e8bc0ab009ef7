//! Text input adapter.
//!
//! Reads quantities as a comma-separated list (`"7, 9, 18"`) and costs as
//! one comma-separated row per line.

mod parse;

pub use parse::{parse_costs, parse_problem, parse_quantities};
