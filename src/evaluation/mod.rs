//! Allocation cost and feasibility evaluation.

mod evaluator;

pub use evaluator::{total_cost, AllocationEvaluator};
