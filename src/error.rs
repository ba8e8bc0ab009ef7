//! Error type for problem construction and input parsing.

use thiserror::Error;

/// Errors raised while building or parsing a transportation problem.
///
/// The allocation methods themselves are infallible: once a
/// [`TransportProblem`](crate::models::TransportProblem) exists, its shape
/// and values have already been validated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// The cost matrix has no rows or no columns.
    #[error("cost matrix must have at least one row and one column")]
    EmptyCosts,

    /// A cost row has a different width than the first row.
    #[error("cost row {row} has {found} entries, expected {expected}")]
    RaggedCosts {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A cost is negative, NaN, or infinite.
    #[error("cost at ({row}, {column}) must be finite and non-negative, got {value}")]
    InvalidCost {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The rejected value.
        value: f64,
    },

    /// A line of cost input has a different number of fields than the first
    /// non-blank line.
    #[error("line {line} has {found} fields, expected {expected}")]
    RaggedLine {
        /// One-based line number in the input text.
        line: usize,
        /// Field count of the first non-blank line.
        expected: usize,
        /// Field count of the offending line.
        found: usize,
    },

    /// Supply vector length differs from the number of cost rows.
    #[error("supply has {found} entries but the cost matrix has {expected} rows")]
    SupplyLengthMismatch {
        /// Number of cost rows.
        expected: usize,
        /// Supply length.
        found: usize,
    },

    /// Demand vector length differs from the number of cost columns.
    #[error("demand has {found} entries but the cost matrix has {expected} columns")]
    DemandLengthMismatch {
        /// Number of cost columns.
        expected: usize,
        /// Demand length.
        found: usize,
    },

    /// Total supply or total demand does not fit in `u64`.
    #[error("total quantity overflows u64")]
    QuantityOverflow,

    /// Input text contained no values.
    #[error("input is empty")]
    EmptyInput,

    /// A token in the input text is not a valid number.
    #[error("line {line}, field {field}: cannot parse {token:?}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// One-based field number within the line.
        field: usize,
        /// The offending token, trimmed.
        token: String,
    },
}
