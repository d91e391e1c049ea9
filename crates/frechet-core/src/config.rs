//! Configuration for the discrete Fréchet engine.

/// Evaluation strategy for the cost matrix recurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillOrder {
    /// Row-major iteration from `(0, 0)`. Every predecessor is final before
    /// the cell that reads it.
    #[default]
    BottomUp,

    /// Memoized demand-driven evaluation starting at the terminal cell.
    /// Pending cells live on a heap-allocated work stack, so long polylines
    /// never deepen the call stack.
    TopDown,
}

/// Configuration for [`DiscreteFrechet`](crate::DiscreteFrechet).
///
/// Construct via [`FrechetConfig::new`], then chain `with_*` methods to override defaults.
///
/// # Defaults
///
/// | Parameter    | Default               |
/// |--------------|-----------------------|
/// | `fill_order` | `FillOrder::BottomUp` |
/// | `max_cells`  | `None` (unbounded)    |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrechetConfig {
    pub(crate) fill_order: FillOrder,
    pub(crate) max_cells: Option<usize>,
}

impl FrechetConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cost matrix evaluation strategy.
    #[must_use]
    pub fn with_fill_order(mut self, fill_order: FillOrder) -> Self {
        self.fill_order = fill_order;
        self
    }

    /// Reject inputs whose cost matrix would hold more than `max_cells`
    /// cells. The check runs before any allocation.
    #[must_use]
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }

    /// Return the configured evaluation strategy.
    #[must_use]
    pub fn fill_order(&self) -> FillOrder {
        self.fill_order
    }

    /// Return the configured cell budget, if any.
    #[must_use]
    pub fn max_cells(&self) -> Option<usize> {
        self.max_cells
    }
}
