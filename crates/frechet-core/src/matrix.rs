//! Dense memo table of coupling costs.

use crate::distance::FrechetDistance;
use crate::error::FrechetError;

/// Marker for a cell that has not been computed yet. No valid coupling cost
/// is negative.
const UNSET: f64 = f64::NEG_INFINITY;

/// Predecessors of cell `(i, j)` in backtracking preference order: advance
/// the first polyline alone, advance both, advance the second polyline alone.
/// Candidates outside the matrix are skipped.
pub(crate) fn predecessors(i: usize, j: usize) -> impl Iterator<Item = (usize, usize)> {
    [
        (i > 0).then(|| (i - 1, j)),
        (i > 0 && j > 0).then(|| (i - 1, j - 1)),
        (j > 0).then(|| (i, j - 1)),
    ]
    .into_iter()
    .flatten()
}

/// Dense `rows × cols` matrix of coupling costs, stored row-major.
///
/// Cell `(i, j)` holds `c(i, j)`, the smallest bottleneck cost of any monotone
/// coupling of the first `i + 1` waypoints of one polyline with the first
/// `j + 1` waypoints of the other. Each cell is written at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl CostMatrix {
    /// Allocate a matrix with every cell unset.
    pub(crate) fn unset(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            rows,
            cols,
            cells: vec![UNSET; rows * cols],
        }
    }

    /// Return the number of rows (waypoints of the first polyline).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns (waypoints of the second polyline).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the finalized cost of cell `(i, j)`, or `None` if it is unset.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        let v = self.cells[self.offset(i, j)];
        (v != UNSET).then_some(v)
    }

    /// Return the cost of cell `(i, j)` or an [`FrechetError::InconsistentState`]
    /// naming the cell if it is unset.
    pub(crate) fn require(&self, i: usize, j: usize) -> Result<f64, FrechetError> {
        self.get(i, j)
            .ok_or(FrechetError::InconsistentState { row: i, col: j })
    }

    /// Finalize cell `(i, j)`.
    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.offset(i, j);
        debug_assert!(self.cells[idx] == UNSET, "cell ({i}, {j}) written twice");
        debug_assert!(value >= 0.0, "coupling cost must be non-negative");
        self.cells[idx] = value;
    }

    /// Return true if every cell has been finalized.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&v| v != UNSET)
    }

    /// Return the coupling measure `c(rows-1, cols-1)`, the discrete Fréchet
    /// distance between the two polylines.
    ///
    /// # Errors
    ///
    /// Returns [`FrechetError::InconsistentState`] if the terminal cell is unset.
    pub fn coupling_measure(&self) -> Result<FrechetDistance, FrechetError> {
        self.require(self.rows - 1, self.cols - 1)
            .map(FrechetDistance::new)
    }

    /// Iterate over rows as slices. Unset cells read as negative infinity.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows, "row index {i} out of bounds for {} rows", self.rows);
        assert!(j < self.cols, "column index {j} out of bounds for {} columns", self.cols);
        i * self.cols + j
    }
}
