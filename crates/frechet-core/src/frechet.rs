//! Discrete Fréchet distance computation.

use tracing::{debug, instrument};

use crate::builder;
use crate::config::{FillOrder, FrechetConfig};
use crate::coupling::CouplingSequence;
use crate::distance::FrechetDistance;
use crate::error::FrechetError;
use crate::matrix::CostMatrix;
use crate::polyline::PolylineView;

/// Immutable discrete Fréchet engine. Thread-safe and copyable.
///
/// Every call builds its own [`CostMatrix`], so one engine can serve any
/// number of concurrent computations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscreteFrechet {
    config: FrechetConfig,
}

impl DiscreteFrechet {
    /// Create an engine with default settings: bottom-up fill, no cell limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from an explicit [`FrechetConfig`].
    #[must_use]
    pub fn with_config(config: FrechetConfig) -> Self {
        Self { config }
    }

    /// Return the engine configuration.
    #[must_use]
    pub fn config(&self) -> FrechetConfig {
        self.config
    }

    /// Compute the discrete Fréchet distance between two polylines.
    ///
    /// Runs in O(p * q) time and space.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`FrechetError::DimensionMismatch`] | `p` and `q` differ in dimension |
    /// | [`FrechetError::ResourceLimit`] | `p.len() * q.len()` exceeds the configured limit |
    #[instrument(skip(self, p, q), fields(p_len = p.len(), q_len = q.len(), dim = p.dim()))]
    pub fn distance(
        &self,
        p: PolylineView<'_>,
        q: PolylineView<'_>,
    ) -> Result<FrechetDistance, FrechetError> {
        let ca = self.cost_matrix(p, q)?;
        ca.coupling_measure()
    }

    /// Compute the optimal coupling sequence between two polylines.
    ///
    /// Rebuilds the cost matrix. Use [`distance_and_coupling`][Self::distance_and_coupling]
    /// when the distance is needed too, or [`cost_matrix`][Self::cost_matrix]
    /// followed by [`CostMatrix::backtrack`] to keep the matrix around.
    ///
    /// # Errors
    ///
    /// Same conditions as [`distance`][Self::distance].
    #[instrument(skip(self, p, q), fields(p_len = p.len(), q_len = q.len(), dim = p.dim()))]
    pub fn coupling_sequence(
        &self,
        p: PolylineView<'_>,
        q: PolylineView<'_>,
    ) -> Result<CouplingSequence, FrechetError> {
        self.cost_matrix(p, q)?.backtrack()
    }

    /// Compute the distance and the coupling sequence from a single matrix build.
    ///
    /// # Errors
    ///
    /// Same conditions as [`distance`][Self::distance].
    #[instrument(skip(self, p, q), fields(p_len = p.len(), q_len = q.len(), dim = p.dim()))]
    pub fn distance_and_coupling(
        &self,
        p: PolylineView<'_>,
        q: PolylineView<'_>,
    ) -> Result<(FrechetDistance, CouplingSequence), FrechetError> {
        let ca = self.cost_matrix(p, q)?;
        let dist = ca.coupling_measure()?;
        let seq = ca.backtrack()?;
        debug!(%dist, len = seq.len(), "coupling computed");
        Ok((dist, seq))
    }

    /// Validate the pair and build the fully populated cost matrix.
    ///
    /// # Errors
    ///
    /// Same conditions as [`distance`][Self::distance].
    pub fn cost_matrix(
        &self,
        p: PolylineView<'_>,
        q: PolylineView<'_>,
    ) -> Result<CostMatrix, FrechetError> {
        self.check_pair(p, q)?;
        builder::build(p, q, self.config.fill_order)
    }

    /// Check everything that can fail before a matrix is allocated.
    fn check_pair(&self, p: PolylineView<'_>, q: PolylineView<'_>) -> Result<(), FrechetError> {
        if p.dim() != q.dim() {
            return Err(FrechetError::DimensionMismatch {
                p_dim: p.dim(),
                q_dim: q.dim(),
            });
        }
        if let Some(max_cells) = self.config.max_cells {
            let cells = p.len().checked_mul(q.len()).unwrap_or(usize::MAX);
            if cells > max_cells {
                return Err(FrechetError::ResourceLimit { cells, max_cells });
            }
        }
        Ok(())
    }

    /// Shorthand for an engine using [`FillOrder::TopDown`].
    #[must_use]
    pub fn top_down() -> Self {
        Self::with_config(FrechetConfig::new().with_fill_order(FillOrder::TopDown))
    }
}
