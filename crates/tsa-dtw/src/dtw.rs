//! DTW distance and alignment.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::alignment::DtwAlignment;
use crate::cost::CostMatrix;
use crate::distance::DtwDistance;
use crate::matrix::{DistanceMatrix, unpack};
use crate::metric::{AbsoluteDifference, PointwiseDistance};
use crate::series::{TimeSeries, TimeSeriesView};
use crate::traceback::{TracebackMode, trace};

/// Immutable DTW calculator, generic over the pointwise metric.
///
/// # Defaults
///
/// | Parameter   | Default                          |
/// |-------------|----------------------------------|
/// | `metric`    | [`AbsoluteDifference`]           |
/// | `traceback` | [`TracebackMode::PrependOrigin`] |
///
/// The returned distance is always the raw accumulated cost; nothing is
/// normalized by sequence or path length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dtw<M = AbsoluteDifference> {
    metric: M,
    traceback: TracebackMode,
}

impl Dtw {
    /// Create a calculator using absolute difference as the pointwise cost.
    #[must_use]
    pub fn new() -> Self {
        Self::with_metric(AbsoluteDifference)
    }
}

impl<M: PointwiseDistance> Dtw<M> {
    /// Create a calculator with a custom pointwise metric.
    #[must_use]
    pub fn with_metric(metric: M) -> Self {
        Self {
            metric,
            traceback: TracebackMode::default(),
        }
    }

    /// Set how the warping path is completed once the traceback hits the
    /// first row or column.
    #[must_use]
    pub fn with_traceback(mut self, traceback: TracebackMode) -> Self {
        self.traceback = traceback;
        self
    }

    /// Return the pointwise metric.
    #[must_use]
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Return the traceback mode.
    #[must_use]
    pub fn traceback(&self) -> TracebackMode {
        self.traceback
    }

    /// Compute the DTW distance between two sequences.
    ///
    /// Uses a rolling two-row buffer rather than the full cost matrix: O(n * m)
    /// time and O(m) space. The result is bit-identical to
    /// [`align`](Self::align)`(a, b).distance`.
    #[must_use]
    #[instrument(skip_all, fields(len_a = a.len(), len_b = b.len()))]
    pub fn distance(&self, a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> DtwDistance {
        DtwDistance::new(self.rolling(a.as_slice(), b.as_slice()))
    }

    /// Compute the distance, optimal warping path, and length metadata.
    ///
    /// Fills the full `(n + 1) × (m + 1)` cost matrix and traces back from the
    /// bottom-right cell. O(n * m) time and space.
    #[must_use]
    #[instrument(skip_all, fields(len_a = a.len(), len_b = b.len()))]
    pub fn align(&self, a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> DtwAlignment {
        let cost = CostMatrix::fill(a.as_slice(), b.as_slice(), &self.metric);
        let path = trace(&cost, self.traceback);
        let alignment = DtwAlignment::new(cost.distance(), path, a.len(), b.len());
        debug!(
            distance = alignment.distance.value(),
            path_len = alignment.path_len,
            "alignment complete"
        );
        alignment
    }

    /// Fill and return the full cost matrix, boundary row and column included.
    #[must_use]
    #[instrument(skip_all, fields(len_a = a.len(), len_b = b.len()))]
    pub fn cost_matrix(&self, a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> CostMatrix {
        CostMatrix::fill(a.as_slice(), b.as_slice(), &self.metric)
    }

    /// Same recurrence as [`CostMatrix::fill`], keeping only two rows.
    ///
    /// Index 0 of each row is the boundary column; `prev` starts as the
    /// boundary row with `[0] = 0`.
    fn rolling(&self, a: &[f64], b: &[f64]) -> f64 {
        let m = b.len();
        let mut prev = vec![f64::INFINITY; m + 1];
        let mut curr = vec![f64::INFINITY; m + 1];
        prev[0] = 0.0;

        for &x in a {
            curr[0] = f64::INFINITY;
            for (j, &y) in b.iter().enumerate() {
                let best = prev[j].min(prev[j + 1]).min(curr[j]);
                curr[j + 1] = self.metric.distance(x, y) + best;
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[m]
    }
}

impl<M: PointwiseDistance + Sync> Dtw<M> {
    /// Compute DTW distances for every unique pair in `series`.
    ///
    /// Pairs are evaluated in parallel with rayon.
    #[must_use]
    #[instrument(skip_all, fields(n = series.len()))]
    pub fn pairwise(&self, series: &[TimeSeries]) -> DistanceMatrix {
        let n = series.len();
        let total_pairs = n * n.saturating_sub(1) / 2;

        let distances: Vec<DtwDistance> = (0..total_pairs)
            .into_par_iter()
            .map(|flat| {
                let (i, j) = unpack(flat);
                self.distance(series[i].as_view(), series[j].as_view())
            })
            .collect();

        debug!(pairs = total_pairs, "pairwise distances complete");
        DistanceMatrix::from_packed(n, distances)
    }
}
