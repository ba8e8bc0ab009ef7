//! Vogel's Approximation Method (VAM), row-penalty variant.
//!
//! Each iteration computes, for every origin with supply left, the penalty
//! of not using its cheapest open destination: the gap between its two
//! smallest open costs. The origin with the largest penalty ships to its
//! cheapest open destination.
//!
//! Only row penalties are used. Once every origin with supply left has at
//! most one open destination, no penalty exists and the method stops; see
//! [`VogelFallback`] for completing the allocation instead.
//!
//! # Complexity
//!
//! O(mn) per assignment, O(mn(m + n)) overall.
//!
//! # Reference
//!
//! Reinfeld, N. V. & Vogel, W. R. (1958). *Mathematical Programming*.
//! Prentice-Hall.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cost::CostMatrix;
use crate::models::{Allocation, TransportProblem};

use super::state::WorkingState;

/// What VAM does when supply remains but no origin has a penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VogelFallback {
    /// Stop and leave the remaining supply unallocated.
    #[default]
    Stop,
    /// Ship through the cheapest open cell and keep going, as in the
    /// Minimum-Cost method.
    MinimumCost,
}

/// Builds an initial allocation with Vogel's Approximation Method.
///
/// Equivalent to [`vogel_approximation_with`] using [`VogelFallback::Stop`].
/// The result may leave supply unallocated when the final open cells all sit
/// in single-destination rows.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::TransportProblem;
/// use u_transport::constructive::vogel_approximation;
///
/// let costs = CostMatrix::from_rows(vec![vec![4.0, 6.0], vec![5.0, 3.0]]).unwrap();
/// let problem = TransportProblem::new(costs, vec![20, 30], vec![25, 25]).unwrap();
///
/// let alloc = vogel_approximation(&problem);
/// assert_eq!(alloc.to_rows(), vec![vec![20, 0], vec![0, 25]]);
/// // Origin 1 is left with a single open destination and no penalty.
/// assert_eq!(alloc.total(), 45);
/// ```
pub fn vogel_approximation(problem: &TransportProblem) -> Allocation {
    vogel_approximation_with(problem, VogelFallback::Stop)
}

/// Builds an initial allocation with Vogel's Approximation Method and the
/// given fallback for penalty-free iterations.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::TransportProblem;
/// use u_transport::constructive::{vogel_approximation_with, VogelFallback};
///
/// let costs = CostMatrix::from_rows(vec![vec![4.0, 6.0], vec![5.0, 3.0]]).unwrap();
/// let problem = TransportProblem::new(costs, vec![20, 30], vec![25, 25]).unwrap();
///
/// let alloc = vogel_approximation_with(&problem, VogelFallback::MinimumCost);
/// assert_eq!(alloc.to_rows(), vec![vec![20, 0], vec![5, 25]]);
/// ```
pub fn vogel_approximation_with(problem: &TransportProblem, fallback: VogelFallback) -> Allocation {
    let costs = problem.costs();
    let mut state = WorkingState::new(problem);
    let mut fallback_steps = 0usize;

    while state.remaining > 0 {
        let cell = match max_penalty_row(costs, &state) {
            Some(row) => costs
                .cheapest_in_row(row, |j| state.demand[j] > 0)
                .map(|(col, _)| (row, col)),
            None => match fallback {
                VogelFallback::Stop => None,
                VogelFallback::MinimumCost => {
                    fallback_steps += 1;
                    state.cheapest_open_cell(costs)
                }
            },
        };
        let Some((i, j)) = cell else {
            break;
        };
        if state.ship(i, j) == 0 {
            break;
        }
    }

    if fallback_steps > 0 {
        debug!("vogel: {fallback_steps} assignments made by minimum-cost fallback");
    }
    state.finish("vogel")
}

/// Returns the origin with the strictly greatest row penalty; ties keep the
/// lowest row index. Rows with fewer than two open destinations have no
/// penalty.
fn max_penalty_row(costs: &CostMatrix, state: &WorkingState) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for i in 0..state.supply.len() {
        if state.supply[i] == 0 {
            continue;
        }
        let Some(penalty) = row_penalty(costs.row(i), &state.demand) else {
            continue;
        };
        if best.is_none_or(|(_, b)| penalty > b) {
            best = Some((i, penalty));
        }
    }
    best.map(|(i, _)| i)
}

/// Difference between the two smallest costs over destinations with demand
/// left, or `None` if fewer than two are open.
fn row_penalty(row: &[f64], demand: &[u64]) -> Option<f64> {
    let mut lowest = f64::INFINITY;
    let mut second = f64::INFINITY;
    let mut open = 0usize;
    for (&c, &d) in row.iter().zip(demand) {
        if d == 0 {
            continue;
        }
        open += 1;
        if c < lowest {
            second = lowest;
            lowest = c;
        } else if c < second {
            second = c;
        }
    }
    (open >= 2).then(|| second - lowest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostMatrix;

    fn problem(costs: Vec<Vec<f64>>, supply: Vec<u64>, demand: Vec<u64>) -> TransportProblem {
        let costs = CostMatrix::from_rows(costs).expect("valid costs");
        TransportProblem::new(costs, supply, demand).expect("valid problem")
    }

    fn classic() -> TransportProblem {
        problem(
            vec![
                vec![19.0, 30.0, 50.0, 10.0],
                vec![70.0, 30.0, 40.0, 60.0],
                vec![40.0, 8.0, 70.0, 20.0],
            ],
            vec![7, 9, 18],
            vec![5, 8, 7, 14],
        )
    }

    #[test]
    fn test_row_penalty() {
        assert_eq!(row_penalty(&[19.0, 30.0, 50.0, 10.0], &[1, 1, 1, 1]), Some(9.0));
        assert_eq!(row_penalty(&[19.0, 30.0, 50.0, 10.0], &[1, 1, 1, 0]), Some(11.0));
        assert_eq!(row_penalty(&[19.0, 30.0, 50.0, 10.0], &[0, 0, 1, 0]), None);
        assert_eq!(row_penalty(&[3.0, 3.0], &[1, 1]), Some(0.0));
    }

    #[test]
    fn test_vam_classic_stops_on_single_column_row() {
        let a = vogel_approximation(&classic());
        // Origin 0 ends with only destination 0 open, so 5 units stay put.
        assert_eq!(
            a.to_rows(),
            vec![vec![0, 0, 0, 2], vec![0, 0, 7, 2], vec![0, 8, 0, 10]]
        );
        assert_eq!(a.total(), 29);
    }

    #[test]
    fn test_vam_classic_with_fallback() {
        let a = vogel_approximation_with(&classic(), VogelFallback::MinimumCost);
        assert_eq!(
            a.to_rows(),
            vec![vec![5, 0, 0, 2], vec![0, 0, 7, 2], vec![0, 8, 0, 10]]
        );
        assert_eq!(a.total(), 34);
    }

    #[test]
    fn test_vam_penalty_tie_prefers_first_row() {
        // Both rows have penalty 2; row 0 is served first.
        let p = problem(vec![vec![4.0, 6.0], vec![5.0, 3.0]], vec![20, 30], vec![25, 25]);
        let a = vogel_approximation(&p);
        assert_eq!(a.get(0, 0), 20);
        assert_eq!(a.get(1, 1), 25);
        assert_eq!(a.get(1, 0), 0);
    }

    #[test]
    fn test_vam_picks_largest_penalty() {
        // Row 1 has penalty 9, row 0 has penalty 1.
        let p = problem(vec![vec![2.0, 3.0], vec![10.0, 1.0]], vec![5, 5], vec![5, 5]);
        let a = vogel_approximation_with(&p, VogelFallback::MinimumCost);
        assert_eq!(a.to_rows(), vec![vec![5, 0], vec![0, 5]]);
    }

    #[test]
    fn test_vam_single_column_problem() {
        // One destination: no row ever has a penalty.
        let p = problem(vec![vec![1.0], vec![2.0]], vec![3, 4], vec![7]);
        assert_eq!(vogel_approximation(&p).total(), 0);
        let a = vogel_approximation_with(&p, VogelFallback::MinimumCost);
        assert_eq!(a.to_rows(), vec![vec![3], vec![4]]);
    }

    #[test]
    fn test_fallback_default_is_stop() {
        assert_eq!(VogelFallback::default(), VogelFallback::Stop);
    }
}
