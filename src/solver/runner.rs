//! Balance-then-allocate driver.

use log::{debug, warn};
use serde::Serialize;

use crate::balance::balance;
use crate::constructive::Method;
use crate::evaluation::AllocationEvaluator;
use crate::models::{Allocation, TransportProblem};

use super::SolverConfig;

/// The outcome of one method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodResult {
    /// Method that produced the allocation.
    pub method: Method,
    /// Units shipped per cell of the balanced problem.
    pub allocation: Allocation,
    /// Total shipping cost of `allocation`.
    pub total_cost: f64,
    /// Balanced supply the method left unshipped.
    pub unallocated: u64,
}

impl MethodResult {
    /// Returns `true` if the method shipped all balanced supply.
    pub fn is_complete(&self) -> bool {
        self.unallocated == 0
    }
}

/// Results of every configured method on one balanced problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    problem: TransportProblem,
    results: Vec<MethodResult>,
}

impl SolveReport {
    /// The balanced problem all methods ran on.
    pub fn problem(&self) -> &TransportProblem {
        &self.problem
    }

    /// Per-method results in configuration order.
    pub fn results(&self) -> &[MethodResult] {
        &self.results
    }

    /// Result of a specific method, if it was run.
    pub fn get(&self, method: Method) -> Option<&MethodResult> {
        self.results.iter().find(|r| r.method == method)
    }

    /// The cheapest complete result; ties keep the earlier method.
    pub fn best(&self) -> Option<&MethodResult> {
        self.results
            .iter()
            .filter(|r| r.is_complete())
            .fold(None, |best: Option<&MethodResult>, r| match best {
                Some(b) if b.total_cost <= r.total_cost => Some(b),
                _ => Some(r),
            })
    }
}

/// Balances `problem`, then runs each configured method on the balanced
/// problem and scores its allocation.
///
/// Every method works on private copies of supply and demand, so the
/// results are independent of the order methods run in.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::constructive::Method;
/// use u_transport::models::TransportProblem;
/// use u_transport::solver::{solve, SolverConfig};
///
/// let costs = CostMatrix::from_rows(vec![vec![4.0, 6.0], vec![5.0, 3.0]]).unwrap();
/// let problem = TransportProblem::new(costs, vec![20, 30], vec![25, 25]).unwrap();
///
/// let report = solve(problem, &SolverConfig::default());
/// let nw = report.get(Method::NorthwestCorner).unwrap();
/// assert_eq!(nw.total_cost, 180.0);
/// assert!(nw.is_complete());
///
/// let vam = report.get(Method::Vogel).unwrap();
/// assert_eq!(vam.unallocated, 5);
/// ```
pub fn solve(problem: TransportProblem, config: &SolverConfig) -> SolveReport {
    let problem = balance(problem);
    let evaluator = AllocationEvaluator::new(&problem);
    let mut results: Vec<MethodResult> = Vec::with_capacity(config.methods.len());

    for &method in &config.methods {
        if results.iter().any(|r| r.method == method) {
            continue;
        }
        let allocation = method.allocate(&problem, config.vogel_fallback);
        let total_cost = evaluator.cost(&allocation);
        let unallocated = evaluator.unallocated(&allocation);
        debug!("{method}: cost {total_cost}, {unallocated} units unallocated");
        if unallocated > 0 {
            warn!("{method} produced an incomplete allocation");
        }
        results.push(MethodResult {
            method,
            allocation,
            total_cost,
            unallocated,
        });
    }

    SolveReport { problem, results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::VogelFallback;
    use crate::cost::CostMatrix;
    use crate::models::Padding;

    fn classic() -> TransportProblem {
        let costs = CostMatrix::from_rows(vec![
            vec![19.0, 30.0, 50.0, 10.0],
            vec![70.0, 30.0, 40.0, 60.0],
            vec![40.0, 8.0, 70.0, 20.0],
        ])
        .expect("valid costs");
        TransportProblem::new(costs, vec![7, 9, 18], vec![5, 8, 7, 14]).expect("valid problem")
    }

    #[test]
    fn test_solve_classic_costs() {
        let report = solve(classic(), &SolverConfig::default());
        assert_eq!(report.results().len(), 3);

        let nw = report.get(Method::NorthwestCorner).expect("ran");
        assert_eq!(nw.total_cost, 1015.0);
        assert!(nw.is_complete());

        let mc = report.get(Method::MinimumCost).expect("ran");
        assert_eq!(mc.total_cost, 814.0);
        assert!(mc.is_complete());

        let vam = report.get(Method::Vogel).expect("ran");
        assert_eq!(vam.total_cost, 684.0);
        assert_eq!(vam.unallocated, 5);

        assert_eq!(report.best().map(|r| r.method), Some(Method::MinimumCost));
    }

    #[test]
    fn test_solve_with_vogel_fallback() {
        let config = SolverConfig::default().with_vogel_fallback(VogelFallback::MinimumCost);
        let report = solve(classic(), &config);
        let vam = report.get(Method::Vogel).expect("ran");
        assert_eq!(vam.total_cost, 779.0);
        assert!(vam.is_complete());
        assert_eq!(report.best().map(|r| r.method), Some(Method::Vogel));
    }

    #[test]
    fn test_solve_balances_first() {
        let costs =
            CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("valid costs");
        let p = TransportProblem::new(costs, vec![10, 20], vec![5, 10]).expect("valid");
        let report = solve(p, &SolverConfig::default());
        assert_eq!(report.problem().padding(), Padding::DummyDestination { demand: 15 });
        for r in report.results() {
            assert_eq!(r.allocation.cols(), 3);
        }
        let nw = report.get(Method::NorthwestCorner).expect("ran");
        assert_eq!(nw.allocation.to_rows(), vec![vec![5, 5, 0], vec![0, 5, 15]]);
        assert_eq!(nw.total_cost, 5.0 + 10.0 + 20.0);
    }

    #[test]
    fn test_solve_selected_methods() {
        let config =
            SolverConfig::default().with_methods(vec![Method::Vogel, Method::Vogel]);
        let report = solve(classic(), &config);
        assert_eq!(report.results().len(), 1);
        assert!(report.get(Method::NorthwestCorner).is_none());
        // The only result is incomplete, so there is no best.
        assert!(report.best().is_none());
    }

    #[test]
    fn test_best_tie_keeps_first() {
        let costs =
            CostMatrix::from_rows(vec![vec![4.0, 6.0], vec![5.0, 3.0]]).expect("valid costs");
        let p = TransportProblem::new(costs, vec![20, 30], vec![25, 25]).expect("valid");
        let report = solve(p, &SolverConfig::default());
        // Northwest Corner and Minimum Cost both cost 180.
        assert_eq!(report.best().map(|r| r.method), Some(Method::NorthwestCorner));
    }

    #[test]
    fn test_report_serializes() {
        let report = solve(classic(), &SolverConfig::default());
        let json = serde_json::to_value(&report).expect("serializable");
        assert_eq!(json["results"][0]["method"], "northwest_corner");
        assert_eq!(json["results"][0]["total_cost"], 1015.0);
        assert_eq!(json["problem"]["padding"], "none");
    }
}
