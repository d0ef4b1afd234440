//! Warping path reconstruction from a filled cost matrix.

use crate::cost::CostMatrix;
use crate::path::{WarpingPath, WarpingStep};

/// How the traceback finishes once it reaches the first row or first column.
///
/// The traceback walks from `(n-1, m-1)` towards the origin only while both
/// coordinates are positive. What happens on the edge is a policy choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracebackMode {
    /// Prepend `(0, 0)` unconditionally once the walk stops.
    ///
    /// Matches the classic unnormalized DTW reference output. If the walk
    /// stops at `(k, 0)` or `(0, k)` with `k > 0` the path jumps straight to
    /// the origin; if it stops at `(0, 0)` the origin appears twice.
    #[default]
    PrependOrigin,

    /// Follow the remaining edge one cell at a time down to `(0, 0)`.
    ///
    /// Every step advances by exactly one cell and the origin appears once,
    /// so the path length is at least `max(n, m)`.
    WalkToOrigin,
}

/// Trace the optimal warping path backwards through `cost`.
///
/// At each interior cell the predecessor with the smallest accumulated cost
/// wins; ties prefer diagonal, then up `(i-1, j)`, then left `(i, j-1)`.
pub(crate) fn trace(cost: &CostMatrix, mode: TracebackMode) -> WarpingPath {
    let mut i = cost.len_a() - 1;
    let mut j = cost.len_b() - 1;

    // Built end-first, reversed once at the end.
    let mut steps = Vec::with_capacity(cost.len_a() + cost.len_b());
    steps.push(WarpingStep::new(i, j));

    while i > 0 && j > 0 {
        let diag = cost.cumulative(i - 1, j - 1);
        let up = cost.cumulative(i - 1, j);
        let left = cost.cumulative(i, j - 1);

        if diag <= up && diag <= left {
            i -= 1;
            j -= 1;
        } else if up <= left {
            i -= 1;
        } else {
            j -= 1;
        }
        steps.push(WarpingStep::new(i, j));
    }

    match mode {
        TracebackMode::PrependOrigin => steps.push(WarpingStep::new(0, 0)),
        TracebackMode::WalkToOrigin => {
            while i > 0 {
                i -= 1;
                steps.push(WarpingStep::new(i, 0));
            }
            while j > 0 {
                j -= 1;
                steps.push(WarpingStep::new(0, j));
            }
        }
    }

    steps.reverse();
    WarpingPath::new(steps)
}
