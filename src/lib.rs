//! # u-transport
//!
//! Initial solutions for the classical transportation problem: ship goods
//! from origins with fixed supply to destinations with fixed demand at
//! minimum unit cost.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (TransportProblem, Allocation, Violation)
//! - [`cost`] — Unit cost matrix
//! - [`balance`] — Dummy origin/destination insertion for unbalanced problems
//! - [`constructive`] — Northwest-Corner, Minimum-Cost, and Vogel's
//!   Approximation Method
//! - [`evaluation`] — Total cost and feasibility checks
//! - [`solver`] — Balance once, run every configured method, compare results
//! - [`input`] — Comma-separated text parsing
//!
//! These are construction heuristics only; no stepping-stone or MODI
//! improvement is applied to their results.

pub mod balance;
pub mod constructive;
pub mod cost;
pub mod error;
pub mod evaluation;
pub mod input;
pub mod models;
pub mod solver;

pub use error::TransportError;
