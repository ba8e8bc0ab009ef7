//! Constructive heuristics for initial transportation solutions.
//!
//! - [`northwest_corner`] — Northwest-Corner rule, O(m + n)
//! - [`minimum_cost`] — Least-cost cell first, O(mn(m + n))
//! - [`vogel_approximation`] — Vogel's Approximation Method with row
//!   penalties, O(mn(m + n))
//!
//! Every method reads a [`TransportProblem`] and works on its own copies of
//! supply and demand, so methods can run on the same problem independently.

mod minimum_cost;
mod northwest_corner;
mod state;
mod vogel;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Allocation, TransportProblem};

pub use minimum_cost::minimum_cost;
pub use northwest_corner::northwest_corner;
pub use vogel::{vogel_approximation, vogel_approximation_with, VogelFallback};

/// An initial-solution method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// [`northwest_corner`].
    NorthwestCorner,
    /// [`minimum_cost`].
    MinimumCost,
    /// [`vogel_approximation_with`].
    Vogel,
}

impl Method {
    /// All methods in their conventional order.
    pub const ALL: [Method; 3] = [Method::NorthwestCorner, Method::MinimumCost, Method::Vogel];

    /// Runs this method on `problem`.
    ///
    /// `fallback` only affects [`Method::Vogel`].
    pub fn allocate(self, problem: &TransportProblem, fallback: VogelFallback) -> Allocation {
        match self {
            Method::NorthwestCorner => northwest_corner(problem),
            Method::MinimumCost => minimum_cost(problem),
            Method::Vogel => vogel_approximation_with(problem, fallback),
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Method::NorthwestCorner => "Northwest Corner",
            Method::MinimumCost => "Minimum Cost",
            Method::Vogel => "Vogel's Approximation",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
