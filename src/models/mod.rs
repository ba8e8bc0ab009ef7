//! Domain model types for transportation problems.
//!
//! Provides the problem instance (costs, supply, demand), the allocation
//! grid each method produces, and the violation types reported when an
//! allocation is checked against its problem.

mod allocation;
mod problem;
mod violation;

pub use allocation::Allocation;
pub use problem::{Padding, TransportProblem};
pub use violation::{Violation, ViolationType};
