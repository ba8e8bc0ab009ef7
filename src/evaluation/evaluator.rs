//! Allocation evaluator that computes cost, shortfall, and feasibility.

use crate::cost::CostMatrix;
use crate::models::{Allocation, TransportProblem, Violation, ViolationType};

/// Total shipping cost: the sum of `allocation[i][j] * costs[i][j]`.
///
/// # Panics
///
/// Panics if the allocation and cost matrix differ in shape.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::Allocation;
/// use u_transport::evaluation::total_cost;
///
/// let costs = CostMatrix::from_rows(vec![vec![4.0, 6.0], vec![5.0, 3.0]]).unwrap();
/// let alloc = Allocation::from_rows(vec![vec![20, 0], vec![5, 25]]).unwrap();
/// assert_eq!(total_cost(&costs, &alloc), 180.0);
/// ```
pub fn total_cost(costs: &CostMatrix, allocation: &Allocation) -> f64 {
    assert_eq!(
        (costs.rows(), costs.cols()),
        (allocation.rows(), allocation.cols()),
        "allocation shape must match the cost matrix"
    );
    allocation
        .shipments()
        .map(|(i, j, q)| q as f64 * costs.get(i, j))
        .sum()
}

/// Checks allocations against a problem's supplies and demands.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::{Allocation, TransportProblem};
/// use u_transport::evaluation::AllocationEvaluator;
///
/// let costs = CostMatrix::from_rows(vec![vec![4.0, 6.0], vec![5.0, 3.0]]).unwrap();
/// let problem = TransportProblem::new(costs, vec![20, 30], vec![25, 25]).unwrap();
/// let alloc = Allocation::from_rows(vec![vec![20, 0], vec![5, 25]]).unwrap();
///
/// let evaluator = AllocationEvaluator::new(&problem);
/// assert!(evaluator.check(&alloc).is_empty());
/// assert_eq!(evaluator.cost(&alloc), 180.0);
/// assert!(!evaluator.is_degenerate(&alloc));
/// ```
pub struct AllocationEvaluator<'a> {
    problem: &'a TransportProblem,
}

impl<'a> AllocationEvaluator<'a> {
    /// Creates an evaluator for the given problem.
    pub fn new(problem: &'a TransportProblem) -> Self {
        Self { problem }
    }

    fn same_shape(&self, allocation: &Allocation) -> bool {
        allocation.rows() == self.problem.num_origins()
            && allocation.cols() == self.problem.num_destinations()
    }

    /// Total shipping cost of the allocation under this problem's costs.
    ///
    /// # Panics
    ///
    /// Panics if the allocation shape differs from the problem shape.
    pub fn cost(&self, allocation: &Allocation) -> f64 {
        total_cost(self.problem.costs(), allocation)
    }

    /// Supply that the allocation leaves unshipped.
    ///
    /// Over-shipped origins count as zero. A mis-shaped allocation ships
    /// nothing.
    pub fn unallocated(&self, allocation: &Allocation) -> u64 {
        if !self.same_shape(allocation) {
            return self.problem.total_supply();
        }
        self.problem
            .supply()
            .iter()
            .enumerate()
            .map(|(i, &s)| s.saturating_sub(allocation.row_sum(i)))
            .sum()
    }

    /// Returns every violation found; an empty list means the allocation
    /// ships exactly every supply and meets exactly every demand.
    pub fn check(&self, allocation: &Allocation) -> Vec<Violation> {
        if !self.same_shape(allocation) {
            return vec![Violation::new(ViolationType::DimensionMismatch {
                expected: (self.problem.num_origins(), self.problem.num_destinations()),
                found: (allocation.rows(), allocation.cols()),
            })];
        }

        let mut violations = Vec::new();

        for (row, &supply) in self.problem.supply().iter().enumerate() {
            let shipped = allocation.row_sum(row);
            if shipped > supply {
                violations.push(Violation::new(ViolationType::SupplyExceeded {
                    row,
                    shipped,
                    supply,
                }));
            } else if shipped < supply {
                violations.push(Violation::new(ViolationType::SupplyUnshipped {
                    row,
                    remaining: supply - shipped,
                }));
            }
        }

        for (column, &demand) in self.problem.demand().iter().enumerate() {
            let received = allocation.col_sum(column);
            if received > demand {
                violations.push(Violation::new(ViolationType::DemandExceeded {
                    column,
                    received,
                    demand,
                }));
            } else if received < demand {
                violations.push(Violation::new(ViolationType::DemandUnmet {
                    column,
                    remaining: demand - received,
                }));
            }
        }

        violations
    }

    /// Returns `true` if no origin or destination is exceeded. Unshipped
    /// supply is allowed.
    pub fn is_within_bounds(&self, allocation: &Allocation) -> bool {
        self.check(allocation).iter().all(|v| !v.is_infeasible())
    }

    /// Returns `true` if fewer than `m + n - 1` cells are occupied.
    pub fn is_degenerate(&self, allocation: &Allocation) -> bool {
        let basis = (self.problem.num_origins() + self.problem.num_destinations())
            .saturating_sub(1);
        allocation.occupied_cells() < basis
    }
}
