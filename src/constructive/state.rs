//! Working copies of supply and demand shared by the allocation methods.

use log::{trace, warn};

use crate::cost::CostMatrix;
use crate::models::{Allocation, TransportProblem};

/// Mutable per-method state: private copies of supply and demand, the
/// remaining-supply counter, and the allocation under construction.
///
/// Each method builds its own `WorkingState`, so runs never share mutable
/// data and the problem itself is left untouched.
pub(crate) struct WorkingState {
    pub(crate) supply: Vec<u64>,
    pub(crate) demand: Vec<u64>,
    pub(crate) remaining: u64,
    allocation: Allocation,
}

impl WorkingState {
    pub(crate) fn new(problem: &TransportProblem) -> Self {
        Self {
            supply: problem.supply().to_vec(),
            demand: problem.demand().to_vec(),
            remaining: problem.total_supply(),
            allocation: Allocation::new(problem.num_origins(), problem.num_destinations()),
        }
    }

    /// Ships `min(supply[row], demand[col])` through the cell and returns the
    /// quantity. Nothing is recorded when the quantity is zero.
    pub(crate) fn ship(&mut self, row: usize, col: usize) -> u64 {
        let quantity = self.supply[row].min(self.demand[col]);
        if quantity == 0 {
            return 0;
        }
        self.allocation.set(row, col, quantity);
        self.supply[row] -= quantity;
        self.demand[col] -= quantity;
        self.remaining -= quantity;
        trace!("ship {quantity} from origin {row} to destination {col}");
        quantity
    }

    /// Scans row-major for the cheapest open cell; ties keep the first one
    /// found.
    pub(crate) fn cheapest_open_cell(&self, costs: &CostMatrix) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..self.supply.len() {
            if self.supply[i] == 0 {
                continue;
            }
            if let Some((j, c)) = costs.cheapest_in_row(i, |j| self.demand[j] > 0) {
                if best.is_none_or(|(_, _, b)| c < b) {
                    best = Some((i, j, c));
                }
            }
        }
        best.map(|(i, j, _)| (i, j))
    }

    /// Consumes the state, warning if supply was left unshipped.
    pub(crate) fn finish(self, method: &str) -> Allocation {
        if self.remaining > 0 {
            warn!(
                "{method} stopped with {} units of supply unallocated",
                self.remaining
            );
        }
        self.allocation
    }
}
