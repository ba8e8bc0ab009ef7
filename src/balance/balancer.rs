//! Dummy row/column insertion.

use log::debug;

use crate::models::TransportProblem;

/// Balances a problem so that total supply equals total demand.
///
/// - Excess supply adds a dummy destination (zero-cost last column) whose
///   demand is the surplus.
/// - Excess demand adds a dummy origin (zero-cost last row) whose supply is
///   the shortfall.
/// - A balanced problem is returned unchanged.
///
/// At most one dummy is added, so balancing twice is the same as once.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::{Padding, TransportProblem};
/// use u_transport::balance::balance;
///
/// let costs = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let problem = TransportProblem::new(costs, vec![10, 20], vec![5, 10]).unwrap();
///
/// let balanced = balance(problem);
/// assert_eq!(balanced.demand(), &[5, 10, 15]);
/// assert_eq!(balanced.costs().row(0), &[1.0, 2.0, 0.0]);
/// assert_eq!(balanced.padding(), Padding::DummyDestination { demand: 15 });
/// ```
pub fn balance(mut problem: TransportProblem) -> TransportProblem {
    let total_supply = problem.total_supply();
    let total_demand = problem.total_demand();

    if total_supply > total_demand {
        let surplus = total_supply - total_demand;
        debug!("supply exceeds demand by {surplus}; adding dummy destination");
        problem.push_dummy_destination(surplus);
    } else if total_demand > total_supply {
        let shortfall = total_demand - total_supply;
        debug!("demand exceeds supply by {shortfall}; adding dummy origin");
        problem.push_dummy_origin(shortfall);
    }

    problem
}
