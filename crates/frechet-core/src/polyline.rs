//! Polyline types with validation guarantees.

use std::ops::Index;

use crate::error::FrechetError;

/// Check shape and values of a flat row-major coordinate buffer.
fn validate(dim: usize, coords: &[f64]) -> Result<(), FrechetError> {
    if dim < 2 {
        return Err(FrechetError::DegenerateDimension { dim });
    }
    if coords.is_empty() {
        return Err(FrechetError::EmptyPolyline);
    }
    if coords.len() % dim != 0 {
        return Err(FrechetError::RaggedWaypoint {
            index: coords.len() / dim,
            expected: dim,
            got: coords.len() % dim,
        });
    }
    if let Some(flat) = coords.iter().position(|v| !v.is_finite()) {
        return Err(FrechetError::NonFiniteCoordinate {
            waypoint: flat / dim,
            axis: flat % dim,
        });
    }
    Ok(())
}

/// Owned, validated polyline. Guaranteed non-empty, rectangular, at least
/// two-dimensional, with all coordinates finite.
///
/// Waypoints are stored row-major in a single flat buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    dim: usize,
    coords: Vec<f64>,
}

impl Polyline {
    /// Create a polyline from one coordinate vector per waypoint.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`FrechetError::EmptyPolyline`] | `waypoints` is empty |
    /// | [`FrechetError::RaggedWaypoint`] | Waypoints differ in coordinate count |
    /// | [`FrechetError::DegenerateDimension`] | Waypoints have fewer than 2 coordinates |
    /// | [`FrechetError::NonFiniteCoordinate`] | Any coordinate is NaN or infinite |
    pub fn new(waypoints: Vec<Vec<f64>>) -> Result<Self, FrechetError> {
        let Some(first) = waypoints.first() else {
            return Err(FrechetError::EmptyPolyline);
        };
        let dim = first.len();
        if let Some(index) = waypoints.iter().position(|w| w.len() != dim) {
            return Err(FrechetError::RaggedWaypoint {
                index,
                expected: dim,
                got: waypoints[index].len(),
            });
        }
        Self::from_flat(dim, waypoints.into_iter().flatten().collect())
    }

    /// Create a polyline from a flat row-major coordinate buffer of
    /// `len * dim` values.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`FrechetError::DegenerateDimension`] | `dim < 2` |
    /// | [`FrechetError::EmptyPolyline`] | `coords` is empty |
    /// | [`FrechetError::RaggedWaypoint`] | `coords.len()` is not a multiple of `dim` |
    /// | [`FrechetError::NonFiniteCoordinate`] | Any coordinate is NaN or infinite |
    pub fn from_flat(dim: usize, coords: Vec<f64>) -> Result<Self, FrechetError> {
        validate(dim, &coords)?;
        Ok(Self { dim, coords })
    }

    /// Borrow this polyline as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> PolylineView<'_> {
        PolylineView::new_unchecked(self.dim, &self.coords)
    }

    /// Return the number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim
    }

    /// Always `false` for a constructed polyline. Provided to satisfy the
    /// `len_without_is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Return the number of coordinates per waypoint.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Return a new polyline with every coordinate multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`FrechetError::NonFiniteCoordinate`] if scaling overflows.
    pub fn scaled(&self, factor: f64) -> Result<Self, FrechetError> {
        Self::from_flat(self.dim, self.coords.iter().map(|c| c * factor).collect())
    }

    /// Consume and return the flat coordinate buffer.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.coords
    }
}

impl TryFrom<Vec<Vec<f64>>> for Polyline {
    type Error = FrechetError;

    fn try_from(waypoints: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(waypoints)
    }
}

impl<const D: usize> TryFrom<&[[f64; D]]> for Polyline {
    type Error = FrechetError;

    fn try_from(waypoints: &[[f64; D]]) -> Result<Self, Self::Error> {
        Self::from_flat(D, waypoints.iter().flatten().copied().collect())
    }
}

/// Borrowed, validated view into a polyline. Zero-copy reference.
#[derive(Debug, Clone, Copy)]
pub struct PolylineView<'a> {
    dim: usize,
    coords: &'a [f64],
}

impl<'a> PolylineView<'a> {
    /// Create a view over a flat row-major buffer, validating it the same way
    /// as [`Polyline::from_flat`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Polyline::from_flat`].
    pub fn new(dim: usize, coords: &'a [f64]) -> Result<Self, FrechetError> {
        validate(dim, coords)?;
        Ok(Self { dim, coords })
    }

    /// Create a view without validation. For internal use where data is already validated.
    pub(crate) fn new_unchecked(dim: usize, coords: &'a [f64]) -> Self {
        Self { dim, coords }
    }

    /// Return the coordinates of waypoint `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn waypoint(&self, i: usize) -> &'a [f64] {
        &self.coords[i * self.dim..(i + 1) * self.dim]
    }

    /// Iterate over waypoints in order.
    pub fn waypoints(self) -> impl ExactSizeIterator<Item = &'a [f64]> {
        self.coords.chunks_exact(self.dim)
    }

    /// Return the number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim
    }

    /// Always `false` for a validated view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Return the number of coordinates per waypoint.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Return the flat row-major coordinate buffer.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.coords
    }
}

impl Index<usize> for PolylineView<'_> {
    type Output = [f64];

    fn index(&self, index: usize) -> &Self::Output {
        self.waypoint(index)
    }
}
