//! Northwest-Corner rule.
//!
//! Walks the grid from the top-left cell, shipping as much as possible at
//! each step and moving down when an origin is exhausted and right when a
//! destination is satisfied. Costs are never consulted, so the result
//! depends only on the order of origins and destinations.
//!
//! # Complexity
//!
//! O(m + n) assignments.

use log::debug;

use crate::models::{Allocation, TransportProblem};

use super::state::WorkingState;

/// Builds an initial allocation with the Northwest-Corner rule.
///
/// When a single assignment exhausts both the origin and the destination,
/// the cursor moves diagonally; the result is then degenerate (fewer than
/// `m + n - 1` occupied cells). The walk stops early if it reaches a cell
/// where nothing can be shipped, which only happens when an origin or
/// destination starts at zero.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::TransportProblem;
/// use u_transport::constructive::northwest_corner;
///
/// let costs = CostMatrix::from_rows(vec![vec![4.0, 6.0], vec![5.0, 3.0]]).unwrap();
/// let problem = TransportProblem::new(costs, vec![20, 30], vec![25, 25]).unwrap();
///
/// let alloc = northwest_corner(&problem);
/// assert_eq!(alloc.to_rows(), vec![vec![20, 0], vec![5, 25]]);
/// ```
pub fn northwest_corner(problem: &TransportProblem) -> Allocation {
    let m = problem.num_origins();
    let n = problem.num_destinations();
    let mut state = WorkingState::new(problem);
    let (mut i, mut j) = (0, 0);

    while i < m && j < n {
        if state.ship(i, j) == 0 {
            break;
        }
        if state.supply[i] == 0 {
            i += 1;
        }
        if state.demand[j] == 0 {
            j += 1;
        }
    }

    debug!(
        "northwest corner: stopped at ({i}, {j}), {} units left",
        state.remaining
    );
    state.finish("northwest corner")
}
