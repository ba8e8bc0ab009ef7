//! Shipment allocation grid.

use std::fmt;

use serde::Serialize;

/// Units shipped from each origin to each destination.
///
/// A dense m×n grid in row-major order; `get(i, j)` is the quantity sent
/// from origin `i` to destination `j`.
///
/// # Examples
///
/// ```
/// use u_transport::models::Allocation;
///
/// let mut alloc = Allocation::new(2, 2);
/// alloc.set(0, 0, 20);
/// alloc.set(1, 1, 25);
/// assert_eq!(alloc.total(), 45);
/// assert_eq!(alloc.row_sum(1), 25);
/// assert_eq!(alloc.occupied_cells(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    data: Vec<u64>,
    rows: usize,
    cols: usize,
}

impl Allocation {
    /// Creates an all-zero allocation.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "allocation must be at least 1x1");
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds an allocation from nested rows.
    ///
    /// Returns `None` if the rows are empty or differ in width.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let m = rows.len();
        Some(Self {
            data: rows.into_iter().flatten().collect(),
            rows: m,
            cols,
        })
    }

    /// Quantity shipped from origin `row` to destination `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> u64 {
        assert!(col < self.cols, "column {col} out of bounds");
        self.data[row * self.cols + col]
    }

    /// Sets the quantity for a cell.
    pub fn set(&mut self, row: usize, col: usize, quantity: u64) {
        assert!(col < self.cols, "column {col} out of bounds");
        self.data[row * self.cols + col] = quantity;
    }

    /// Number of origins.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of destinations.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Quantities shipped from one origin.
    pub fn row(&self, row: usize) -> &[u64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Total shipped from origin `row`.
    pub fn row_sum(&self, row: usize) -> u64 {
        self.row(row).iter().sum()
    }

    /// Total received by destination `col`.
    pub fn col_sum(&self, col: usize) -> u64 {
        (0..self.rows).map(|i| self.get(i, col)).sum()
    }

    /// Total units shipped.
    pub fn total(&self) -> u64 {
        self.data.iter().sum()
    }

    /// Number of cells with a positive quantity (basic cells).
    pub fn occupied_cells(&self) -> usize {
        self.data.iter().filter(|&&q| q > 0).count()
    }

    /// Iterates over positive cells as `(row, col, quantity)`.
    pub fn shipments(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, q)| **q > 0)
            .map(move |(idx, &q)| (idx / self.cols, idx % self.cols, q))
    }

    /// Copies the grid into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.data.chunks(self.cols).map(<[u64]>::to_vec).collect()
    }
}

/// Renders the grid with right-aligned columns, one origin per line.
impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|q| q.to_string().len())
            .max()
            .unwrap_or(1);
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, q) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{q:>width$}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Allocation {
        Allocation::from_rows(vec![vec![20, 0], vec![5, 25]]).expect("rectangular")
    }

    #[test]
    fn test_new_is_empty() {
        let a = Allocation::new(2, 3);
        assert_eq!(a.total(), 0);
        assert_eq!(a.occupied_cells(), 0);
        assert_eq!(a.rows(), 2);
        assert_eq!(a.cols(), 3);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn test_new_rejects_zero_width() {
        let _ = Allocation::new(2, 0);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn test_new_rejects_zero_height() {
        let _ = Allocation::new(0, 3);
    }

    #[test]
    fn test_sums() {
        let a = sample();
        assert_eq!(a.row_sum(0), 20);
        assert_eq!(a.row_sum(1), 30);
        assert_eq!(a.col_sum(0), 25);
        assert_eq!(a.col_sum(1), 25);
        assert_eq!(a.total(), 50);
        assert_eq!(a.occupied_cells(), 3);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(Allocation::from_rows(vec![vec![1, 2], vec![3]]).is_none());
        assert!(Allocation::from_rows(vec![]).is_none());
    }

    #[test]
    fn test_shipments() {
        let cells: Vec<_> = sample().shipments().collect();
        assert_eq!(cells, vec![(0, 0, 20), (1, 0, 5), (1, 1, 25)]);
    }

    #[test]
    fn test_to_rows() {
        assert_eq!(sample().to_rows(), vec![vec![20, 0], vec![5, 25]]);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "20  0\n 5 25");
    }
}
