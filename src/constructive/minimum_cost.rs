//! Minimum-Cost (least-cost) method.
//!
//! Repeatedly ships as much as possible through the cheapest cell that still
//! has both supply and demand.
//!
//! # Complexity
//!
//! O(mn) per assignment, O(mn(m + n)) overall.

use log::debug;

use crate::models::{Allocation, TransportProblem};

use super::state::WorkingState;

/// Builds an initial allocation with the Minimum-Cost method.
///
/// Each step scans the whole grid in row-major order for the cheapest cell
/// whose origin has supply left and whose destination has demand left. Ties
/// go to the first cell found (lowest row, then lowest column).
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::TransportProblem;
/// use u_transport::constructive::minimum_cost;
///
/// let costs = CostMatrix::from_rows(vec![vec![4.0, 6.0], vec![5.0, 3.0]]).unwrap();
/// let problem = TransportProblem::new(costs, vec![20, 30], vec![25, 25]).unwrap();
///
/// // Cell (1, 1) at cost 3 is filled first.
/// let alloc = minimum_cost(&problem);
/// assert_eq!(alloc.to_rows(), vec![vec![20, 0], vec![5, 25]]);
/// ```
pub fn minimum_cost(problem: &TransportProblem) -> Allocation {
    let costs = problem.costs();
    let mut state = WorkingState::new(problem);
    let mut steps = 0usize;

    while state.remaining > 0 {
        let Some((i, j)) = state.cheapest_open_cell(costs) else {
            break;
        };
        if state.ship(i, j) == 0 {
            break;
        }
        steps += 1;
    }

    debug!("minimum cost: {steps} assignments");
    state.finish("minimum cost")
}
