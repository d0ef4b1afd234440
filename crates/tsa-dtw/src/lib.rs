//! Dynamic Time Warping distance and alignment.
//!
//! Pure math library with zero I/O. Fills the `(n + 1) × (m + 1)` DTW cost
//! matrix under a caller-chosen pointwise metric, returns the unscaled
//! alignment cost, and optionally traces back the optimal warping path along
//! with the length metadata needed to normalize it.
//!
//! ```
//! use tsa_dtw::{Dtw, TimeSeries};
//!
//! let x = TimeSeries::from_integers(&[0, 0, 1, 1, 2, 4, 2, 1, 2, 0]).unwrap();
//! let y = TimeSeries::from_integers(&[1, 1, 1, 2, 2, 2, 2, 3, 2, 0]).unwrap();
//!
//! let dtw = Dtw::new();
//! assert_eq!(dtw.distance(x.as_view(), y.as_view()).value(), 4.0);
//!
//! let alignment = dtw.align(x.as_view(), y.as_view());
//! assert_eq!(alignment.path_len, 13);
//! ```

mod alignment;
mod cost;
mod distance;
mod dtw;
mod error;
mod matrix;
mod metric;
mod path;
mod series;
mod traceback;

pub use alignment::DtwAlignment;
pub use cost::CostMatrix;
pub use distance::DtwDistance;
pub use dtw::Dtw;
pub use error::DtwError;
pub use matrix::DistanceMatrix;
pub use metric::{AbsoluteDifference, PointwiseDistance, SquaredDifference};
pub use path::{WarpingPath, WarpingStep};
pub use series::{TimeSeries, TimeSeriesView};
pub use traceback::TracebackMode;
