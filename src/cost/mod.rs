//! Unit shipping cost matrices.
//!
//! Provides a dense origin × destination cost matrix.

mod matrix;

pub use matrix::CostMatrix;
