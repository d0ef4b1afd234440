//! Pointwise distance functions used to fill the DTW cost matrix.

/// Distance between two individual observations.
///
/// `Dtw` is generic over this trait so the metric call inlines into the
/// matrix-fill loop. Implementations are expected to return non-negative
/// values, but nothing checks that: NaN or negative costs flow straight into
/// the accumulated distance.
///
/// Any `Fn(f64, f64) -> f64` closure is a metric:
///
/// ```
/// use tsa_dtw::{Dtw, TimeSeries};
///
/// let a = TimeSeries::new(vec![0.0, 2.0]).unwrap();
/// let b = TimeSeries::new(vec![1.0, 2.0]).unwrap();
/// let cubic = Dtw::with_metric(|x: f64, y: f64| (x - y).abs().powi(3));
/// assert_eq!(cubic.distance(a.as_view(), b.as_view()).value(), 1.0);
/// ```
pub trait PointwiseDistance {
    /// Cost of matching observation `x` with observation `y`.
    fn distance(&self, x: f64, y: f64) -> f64;
}

/// `|x - y|`. The default metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsoluteDifference;

impl PointwiseDistance for AbsoluteDifference {
    #[inline]
    fn distance(&self, x: f64, y: f64) -> f64 {
        (x - y).abs()
    }
}

/// `(x - y)^2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquaredDifference;

impl PointwiseDistance for SquaredDifference {
    #[inline]
    fn distance(&self, x: f64, y: f64) -> f64 {
        (x - y).powi(2)
    }
}

impl<F> PointwiseDistance for F
where
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn distance(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
