//! Error types for polyline validation and Fréchet computation.

/// Errors from polyline validation, cost matrix construction, and backtracking.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrechetError {
    /// Returned when a polyline has no waypoints.
    #[error("polyline must contain at least one waypoint")]
    EmptyPolyline,

    /// Returned when waypoints do not all have the same number of coordinates,
    /// i.e. the input is not a rectangular array of waypoints.
    #[error("waypoint {index} has {got} coordinates, expected {expected}")]
    RaggedWaypoint {
        /// Position of the first offending waypoint.
        index: usize,
        /// Coordinate count established by the first waypoint.
        expected: usize,
        /// Coordinate count of the offending waypoint.
        got: usize,
    },

    /// Returned when waypoints have fewer than two coordinates.
    #[error("waypoints must have at least 2 coordinates, got {dim}")]
    DegenerateDimension {
        /// Coordinate count of the polyline.
        dim: usize,
    },

    /// Returned when a coordinate is NaN, infinity, or negative infinity.
    #[error("non-finite coordinate at waypoint {waypoint}, axis {axis}")]
    NonFiniteCoordinate {
        /// Waypoint index of the first non-finite coordinate.
        waypoint: usize,
        /// Axis (column) of the first non-finite coordinate.
        axis: usize,
    },

    /// Returned when the two polylines live in spaces of different dimension.
    #[error("dimension mismatch: first polyline has {p_dim} coordinates per waypoint, second has {q_dim}")]
    DimensionMismatch {
        /// Dimension of the first polyline.
        p_dim: usize,
        /// Dimension of the second polyline.
        q_dim: usize,
    },

    /// Returned when backtracking reads a cost matrix cell that was never filled.
    #[error("cost matrix cell ({row}, {col}) is unset; the matrix was not fully built")]
    InconsistentState {
        /// Row (first polyline index) of the unset cell.
        row: usize,
        /// Column (second polyline index) of the unset cell.
        col: usize,
    },

    /// Returned when the cost matrix would exceed the configured cell budget.
    #[error("cost matrix of {cells} cells exceeds the limit of {max_cells}")]
    ResourceLimit {
        /// Requested cell count, saturated at `usize::MAX` on overflow.
        cells: usize,
        /// Configured maximum.
        max_cells: usize,
    },
}

impl FrechetError {
    /// Return true if the error describes malformed caller input rather than
    /// an integration fault or a resource budget.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyPolyline
                | Self::RaggedWaypoint { .. }
                | Self::DegenerateDimension { .. }
                | Self::NonFiniteCoordinate { .. }
                | Self::DimensionMismatch { .. }
        )
    }
}
