//! Cost matrix construction from the coupling-measure recurrence.

use tracing::debug;

use crate::config::FillOrder;
use crate::distance::euclidean;
use crate::error::FrechetError;
use crate::matrix::{CostMatrix, predecessors};
use crate::polyline::PolylineView;

/// Evaluate `c(i, j)` from its already-final predecessors:
///
/// - `c(0, 0) = d(P0, Q0)`
/// - `c(i, 0) = max(c(i-1, 0), d(Pi, Q0))`
/// - `c(0, j) = max(c(0, j-1), d(P0, Qj))`
/// - `c(i, j) = max(min(c(i-1, j), c(i-1, j-1), c(i, j-1)), d(Pi, Qj))`
fn coupling_cost(
    ca: &CostMatrix,
    p: PolylineView<'_>,
    q: PolylineView<'_>,
    i: usize,
    j: usize,
) -> Result<f64, FrechetError> {
    let dist = euclidean(p.waypoint(i), q.waypoint(j));
    let cost = match (i, j) {
        (0, 0) => dist,
        (_, 0) => ca.require(i - 1, 0)?.max(dist),
        (0, _) => ca.require(0, j - 1)?.max(dist),
        (_, _) => ca
            .require(i - 1, j)?
            .min(ca.require(i - 1, j - 1)?)
            .min(ca.require(i, j - 1)?)
            .max(dist),
    };
    Ok(cost)
}

/// Fill every cell of `ca` in row-major order.
fn fill_bottom_up(
    ca: &mut CostMatrix,
    p: PolylineView<'_>,
    q: PolylineView<'_>,
) -> Result<(), FrechetError> {
    for i in 0..ca.rows() {
        for j in 0..ca.cols() {
            let cost = coupling_cost(ca, p, q, i, j)?;
            ca.set(i, j, cost);
        }
    }
    Ok(())
}

/// Fill `ca` on demand from the terminal cell.
///
/// A cell is finalized once all its predecessors are; until then the unset
/// predecessors are pushed above it. A cell may be pushed more than once but
/// is written exactly once, the first time it reaches the top with nothing
/// pending.
fn fill_top_down(
    ca: &mut CostMatrix,
    p: PolylineView<'_>,
    q: PolylineView<'_>,
) -> Result<(), FrechetError> {
    let mut stack = vec![(ca.rows() - 1, ca.cols() - 1)];
    let mut max_depth = 1;

    while let Some(&(i, j)) = stack.last() {
        if ca.get(i, j).is_some() {
            stack.pop();
            continue;
        }

        let before = stack.len();
        stack.extend(predecessors(i, j).filter(|&(pi, pj)| ca.get(pi, pj).is_none()));
        // First-preference predecessor on top.
        stack[before..].reverse();

        if stack.len() == before {
            let cost = coupling_cost(ca, p, q, i, j)?;
            ca.set(i, j, cost);
            stack.pop();
        }
        max_depth = max_depth.max(stack.len());
    }

    debug!(max_depth, "top-down fill finished");
    Ok(())
}

/// Build the full cost matrix for `p` against `q`.
///
/// Both inputs must already be validated and share a dimension.
pub(crate) fn build(
    p: PolylineView<'_>,
    q: PolylineView<'_>,
    order: FillOrder,
) -> Result<CostMatrix, FrechetError> {
    let mut ca = CostMatrix::unset(p.len(), q.len());
    match order {
        FillOrder::BottomUp => fill_bottom_up(&mut ca, p, q)?,
        FillOrder::TopDown => fill_top_down(&mut ca, p, q)?,
    }
    debug_assert!(ca.is_complete());
    debug!(rows = ca.rows(), cols = ca.cols(), ?order, "cost matrix filled");
    Ok(ca)
}
