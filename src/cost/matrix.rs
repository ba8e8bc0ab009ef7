//! Dense unit-cost matrix.

use serde::Serialize;

use crate::error::TransportError;

/// A dense m×n matrix of unit shipping costs, stored in row-major order.
///
/// Rows are origins, columns are destinations. Every entry is finite and
/// non-negative.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![4.0, 6.0, 9.0],
///     vec![5.0, 3.0, 2.0],
/// ]).unwrap();
/// assert_eq!(costs.rows(), 2);
/// assert_eq!(costs.cols(), 3);
/// assert_eq!(costs.get(1, 2), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Fails if there are no rows or columns, if rows differ in width, or if
    /// any cost is negative or non-finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TransportError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(TransportError::EmptyCosts);
        }
        let m = rows.len();
        let mut data = Vec::with_capacity(m * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(TransportError::RaggedCosts {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Self::from_data(m, cols, data)
    }

    /// Builds a matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Fails if either dimension is zero, if the buffer length is not
    /// `rows * cols`, or if any cost is negative or non-finite.
    pub fn from_data(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, TransportError> {
        if rows == 0 || cols == 0 {
            return Err(TransportError::EmptyCosts);
        }
        if data.len() != rows * cols {
            return Err(TransportError::RaggedCosts {
                row: data.len() / cols,
                expected: cols,
                found: data.len() % cols,
            });
        }
        if let Some(idx) = data.iter().position(|c| !c.is_finite() || *c < 0.0) {
            return Err(TransportError::InvalidCost {
                row: idx / cols,
                column: idx % cols,
                value: data[idx],
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the unit cost from origin `row` to destination `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of bounds");
        self.data[row * self.cols + col]
    }

    /// Returns the costs of one origin as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Number of origins.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of destinations.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a copy with every cost multiplied by `factor`.
    ///
    /// Returns `None` if `factor` is negative or non-finite.
    pub fn scaled(&self, factor: f64) -> Option<Self> {
        if !factor.is_finite() || factor < 0.0 {
            return None;
        }
        Some(Self {
            data: self.data.iter().map(|c| c * factor).collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Appends a zero-cost origin (dummy row).
    pub(crate) fn push_zero_row(&mut self) {
        self.data.extend(std::iter::repeat_n(0.0, self.cols));
        self.rows += 1;
    }

    /// Appends a zero-cost destination (dummy column) to every row.
    pub(crate) fn push_zero_col(&mut self) {
        let mut data = Vec::with_capacity(self.rows * (self.cols + 1));
        for row in self.data.chunks(self.cols) {
            data.extend_from_slice(row);
            data.push(0.0);
        }
        self.data = data;
        self.cols += 1;
    }

    /// Returns the cheapest column of `row` among those accepted by
    /// `available`, together with its cost.
    ///
    /// Ties resolve to the lowest column index. Returns `None` if no column
    /// is available.
    pub fn cheapest_in_row<F>(&self, row: usize, available: F) -> Option<(usize, f64)>
    where
        F: Fn(usize) -> bool,
    {
        let mut best: Option<(usize, f64)> = None;
        for (j, &c) in self.row(row).iter().enumerate() {
            if !available(j) {
                continue;
            }
            if best.is_none_or(|(_, b)| c < b) {
                best = Some((j, c));
            }
        }
        best
    }
}
