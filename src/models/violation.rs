//! Constraint violation types.

use serde::Serialize;

/// A type of constraint violation in an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViolationType {
    /// Allocation shape differs from the problem shape.
    DimensionMismatch {
        /// Problem shape as `(origins, destinations)`.
        expected: (usize, usize),
        /// Allocation shape.
        found: (usize, usize),
    },
    /// An origin ships more than it supplies.
    SupplyExceeded {
        /// Origin index.
        row: usize,
        /// Units shipped.
        shipped: u64,
        /// Available supply.
        supply: u64,
    },
    /// A destination receives more than it demands.
    DemandExceeded {
        /// Destination index.
        column: usize,
        /// Units received.
        received: u64,
        /// Required demand.
        demand: u64,
    },
    /// An origin still holds supply.
    SupplyUnshipped {
        /// Origin index.
        row: usize,
        /// Units left.
        remaining: u64,
    },
    /// A destination has not received its full demand.
    DemandUnmet {
        /// Destination index.
        column: usize,
        /// Units missing.
        remaining: u64,
    },
}

/// A constraint violation in an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }

    /// Returns `true` for over-shipment or shape errors, as opposed to
    /// quantities that were simply left unassigned.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self.kind,
            ViolationType::DimensionMismatch { .. }
                | ViolationType::SupplyExceeded { .. }
                | ViolationType::DemandExceeded { .. }
        )
    }
}
