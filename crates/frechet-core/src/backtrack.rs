//! Coupling sequence reconstruction from a filled cost matrix.

use tracing::{debug, instrument};

use crate::coupling::{CouplingSequence, CouplingStep};
use crate::error::FrechetError;
use crate::matrix::{CostMatrix, predecessors};

impl CostMatrix {
    /// Walk from the terminal cell `(rows-1, cols-1)` back to `(0, 0)`, always
    /// stepping to the cheapest predecessor, and return the visited cells in
    /// origin-to-terminal order.
    ///
    /// Candidates are examined in the order `(i-1, j)`, `(i-1, j-1)`, `(i, j-1)`
    /// and a later candidate only wins when strictly cheaper, so ties prefer
    /// advancing the first polyline alone, then both, then the second alone.
    /// Cells outside the matrix are never candidates.
    ///
    /// # Errors
    ///
    /// Returns [`FrechetError::InconsistentState`] if the walk reads an unset
    /// cell, meaning the matrix was not fully built.
    #[instrument(skip(self), fields(rows = self.rows(), cols = self.cols()))]
    pub fn backtrack(&self) -> Result<CouplingSequence, FrechetError> {
        let (mut i, mut j) = (self.rows() - 1, self.cols() - 1);
        self.require(i, j)?;

        let mut steps = Vec::with_capacity(self.rows() + self.cols() - 1);
        steps.push(CouplingStep { p: i, q: j });

        while (i, j) != (0, 0) {
            let mut best: Option<((usize, usize), f64)> = None;
            for cell in predecessors(i, j) {
                let cost = self.require(cell.0, cell.1)?;
                if best.is_none_or(|(_, b)| cost < b) {
                    best = Some((cell, cost));
                }
            }
            match best {
                Some(((pi, pj), _)) => {
                    i = pi;
                    j = pj;
                }
                None => unreachable!("every cell except the origin has a predecessor"),
            }
            steps.push(CouplingStep { p: i, q: j });
        }

        steps.reverse();
        debug!(len = steps.len(), "coupling sequence reconstructed");
        Ok(CouplingSequence::new(steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(rows: usize, cols: usize, values: &[f64]) -> CostMatrix {
        let mut m = CostMatrix::unset(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                m.set(i, j, values[i * cols + j]);
            }
        }
        m
    }

    #[test]
    fn single_cell_is_origin_only() {
        let m = filled(1, 1, &[2.5]);
        assert_eq!(m.backtrack().unwrap().to_pairs(), vec![(0, 0)]);
    }

    #[test]
    fn ties_prefer_first_polyline_step() {
        // All-zero 3x2 matrix: every comparison is a tie.
        let m = filled(3, 2, &[0.0; 6]);
        let seq = m.backtrack().unwrap();
        assert_eq!(seq.to_pairs(), vec![(0, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn diagonal_wins_when_strictly_cheaper() {
        #[rustfmt::skip]
        let m = filled(2, 2, &[
            1.0, 2.0,
            2.0, 2.0,
        ]);
        assert_eq!(m.backtrack().unwrap().to_pairs(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn second_polyline_step_when_cheapest() {
        #[rustfmt::skip]
        let m = filled(2, 3, &[
            0.0, 2.0, 3.0,
            3.0, 1.0, 1.0,
        ]);
        assert_eq!(
            m.backtrack().unwrap().to_pairs(),
            vec![(0, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn border_rows_walk_straight_to_origin() {
        let m = filled(1, 4, &[0.0, 1.0, 1.0, 2.0]);
        assert_eq!(
            m.backtrack().unwrap().to_pairs(),
            vec![(0, 0), (0, 1), (0, 2), (0, 3)]
        );
        let m = filled(3, 1, &[0.0, 1.0, 1.0]);
        assert_eq!(m.backtrack().unwrap().to_pairs(), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn infinite_costs_never_leave_the_matrix() {
        let m = filled(1, 3, &[f64::INFINITY; 3]);
        assert_eq!(
            m.backtrack().unwrap().to_pairs(),
            vec![(0, 0), (0, 1), (0, 2)]
        );
    }

    #[test]
    fn unset_matrix_is_inconsistent() {
        let m = CostMatrix::unset(2, 2);
        assert_eq!(
            m.backtrack(),
            Err(FrechetError::InconsistentState { row: 1, col: 1 })
        );
    }

    #[test]
    fn unset_cell_on_walk_is_reported() {
        let mut m = CostMatrix::unset(2, 2);
        m.set(1, 1, 1.0);
        m.set(0, 1, 1.0);
        assert_eq!(
            m.backtrack(),
            Err(FrechetError::InconsistentState { row: 0, col: 0 })
        );
    }
}
