//! Accumulated alignment cost.

use std::cmp::Ordering;
use std::fmt;

/// Total DTW alignment cost, unscaled by sequence or path length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DtwDistance(f64);

impl DtwDistance {
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw cost.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<DtwDistance> for f64 {
    fn from(d: DtwDistance) -> Self {
        d.0
    }
}

impl fmt::Display for DtwDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
