//! Coupling sequence types produced by backtracking.

use crate::distance::euclidean;
use crate::polyline::PolylineView;

/// A single coupling pair, matching waypoint `p` of the first polyline with
/// waypoint `q` of the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CouplingStep {
    /// Index in the first polyline.
    pub p: usize,
    /// Index in the second polyline.
    pub q: usize,
}

impl From<(usize, usize)> for CouplingStep {
    fn from((p, q): (usize, usize)) -> Self {
        Self { p, q }
    }
}

/// An ordered, monotone sequence of coupling pairs from `(0, 0)` to
/// `(p-1, q-1)`. Each consecutive pair advances one or both indices by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouplingSequence(Vec<CouplingStep>);

impl CouplingSequence {
    /// Create a new coupling sequence from steps ordered origin to terminal.
    pub(crate) fn new(steps: Vec<CouplingStep>) -> Self {
        debug_assert!(!steps.is_empty());
        Self(steps)
    }

    /// Return the coupling steps as a slice.
    #[must_use]
    pub fn steps(&self) -> &[CouplingStep] {
        &self.0
    }

    /// Return the number of coupling pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the sequence contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the pairs as `(p, q)` tuples.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.0.iter().map(|s| (s.p, s.q)).collect()
    }

    /// Pointwise distance between the coupled waypoints of each step.
    ///
    /// # Panics
    ///
    /// Panics if a step indexes past the end of `p` or `q`, i.e. the polylines
    /// are not the ones this sequence was computed from.
    #[must_use]
    pub fn step_distances(&self, p: PolylineView<'_>, q: PolylineView<'_>) -> Vec<f64> {
        self.0
            .iter()
            .map(|s| euclidean(p.waypoint(s.p), q.waypoint(s.q)))
            .collect()
    }

    /// Largest pointwise distance along the coupling. For a sequence produced
    /// by backtracking this equals the Fréchet distance.
    ///
    /// # Panics
    ///
    /// Same conditions as [`step_distances`][Self::step_distances].
    #[must_use]
    pub fn max_step_distance(&self, p: PolylineView<'_>, q: PolylineView<'_>) -> f64 {
        self.step_distances(p, q).into_iter().fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a CouplingSequence {
    type Item = &'a CouplingStep;
    type IntoIter = std::slice::Iter<'a, CouplingStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
