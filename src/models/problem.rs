//! Transportation problem instance.

use serde::Serialize;

use crate::cost::CostMatrix;
use crate::error::TransportError;

/// The synthetic origin or destination added when balancing a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    /// Supply and demand were already equal.
    None,
    /// A zero-cost origin (last row) absorbs excess demand.
    DummyOrigin {
        /// Supply of the dummy origin.
        supply: u64,
    },
    /// A zero-cost destination (last column) absorbs excess supply.
    DummyDestination {
        /// Demand of the dummy destination.
        demand: u64,
    },
}

/// A transportation problem: unit costs plus supply and demand vectors.
///
/// Supply is index-aligned with cost rows, demand with cost columns. Once
/// constructed, the shape is consistent and totals fit in `u64`.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::TransportProblem;
///
/// let costs = CostMatrix::from_rows(vec![vec![4.0, 6.0], vec![5.0, 3.0]]).unwrap();
/// let problem = TransportProblem::new(costs, vec![20, 30], vec![25, 25]).unwrap();
/// assert_eq!(problem.num_origins(), 2);
/// assert_eq!(problem.total_supply(), 50);
/// assert!(problem.is_balanced());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportProblem {
    costs: CostMatrix,
    supply: Vec<u64>,
    demand: Vec<u64>,
    padding: Padding,
}

impl TransportProblem {
    /// Creates a problem, checking that the vectors match the matrix shape.
    ///
    /// # Errors
    ///
    /// Fails on a length mismatch, or if either total overflows `u64`.
    pub fn new(
        costs: CostMatrix,
        supply: Vec<u64>,
        demand: Vec<u64>,
    ) -> Result<Self, TransportError> {
        if supply.len() != costs.rows() {
            return Err(TransportError::SupplyLengthMismatch {
                expected: costs.rows(),
                found: supply.len(),
            });
        }
        if demand.len() != costs.cols() {
            return Err(TransportError::DemandLengthMismatch {
                expected: costs.cols(),
                found: demand.len(),
            });
        }
        checked_total(&supply)?;
        checked_total(&demand)?;
        Ok(Self {
            costs,
            supply,
            demand,
            padding: Padding::None,
        })
    }

    /// Unit cost matrix.
    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    /// Supply per origin.
    pub fn supply(&self) -> &[u64] {
        &self.supply
    }

    /// Demand per destination.
    pub fn demand(&self) -> &[u64] {
        &self.demand
    }

    /// The dummy inserted by balancing, if any.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Number of origins (rows), including a dummy origin.
    pub fn num_origins(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations (columns), including a dummy destination.
    pub fn num_destinations(&self) -> usize {
        self.demand.len()
    }

    /// Sum of all supplies.
    pub fn total_supply(&self) -> u64 {
        self.supply.iter().sum()
    }

    /// Sum of all demands.
    pub fn total_demand(&self) -> u64 {
        self.demand.iter().sum()
    }

    /// Returns `true` if total supply equals total demand.
    pub fn is_balanced(&self) -> bool {
        self.total_supply() == self.total_demand()
    }

    /// Appends a zero-cost origin with the given supply.
    pub(crate) fn push_dummy_origin(&mut self, supply: u64) {
        self.costs.push_zero_row();
        self.supply.push(supply);
        self.padding = Padding::DummyOrigin { supply };
    }

    /// Appends a zero-cost destination with the given demand.
    pub(crate) fn push_dummy_destination(&mut self, demand: u64) {
        self.costs.push_zero_col();
        self.demand.push(demand);
        self.padding = Padding::DummyDestination { demand };
    }
}

fn checked_total(values: &[u64]) -> Result<u64, TransportError> {
    values
        .iter()
        .try_fold(0u64, |acc, &v| acc.checked_add(v))
        .ok_or(TransportError::QuantityOverflow)
}
