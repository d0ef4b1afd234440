//! Full DTW alignment result.

use crate::distance::DtwDistance;
use crate::path::WarpingPath;

/// Distance, warping path, and the length metadata callers use to scale it.
///
/// No normalization is applied to `distance`; the length fields let callers
/// choose their own scaling.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DtwAlignment {
    /// Total alignment cost, unscaled.
    pub distance: DtwDistance,
    /// Optimal warping path from `(0, 0)` to `(len_a - 1, len_b - 1)`.
    pub path: WarpingPath,
    /// Length of the shorter input sequence.
    pub min_len: usize,
    /// Length of the longer input sequence.
    pub max_len: usize,
    /// Number of steps in `path`.
    pub path_len: usize,
}

impl DtwAlignment {
    pub(crate) fn new(distance: DtwDistance, path: WarpingPath, len_a: usize, len_b: usize) -> Self {
        let path_len = path.len();
        Self {
            distance,
            path,
            min_len: len_a.min(len_b),
            max_len: len_a.max(len_b),
            path_len,
        }
    }

    /// `distance / max_len`.
    #[must_use]
    pub fn normalized_by_max_len(&self) -> f64 {
        self.distance.value() / self.max_len as f64
    }

    /// `distance / path_len`.
    #[must_use]
    pub fn normalized_by_path_len(&self) -> f64 {
        self.distance.value() / self.path_len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::WarpingStep;

    fn sample() -> DtwAlignment {
        let path = WarpingPath::new(vec![
            WarpingStep::new(0, 0),
            WarpingStep::new(1, 0),
            WarpingStep::new(2, 1),
            WarpingStep::new(3, 1),
        ]);
        DtwAlignment::new(DtwDistance::new(6.0), path, 4, 2)
    }

    #[test]
    fn length_metadata() {
        let al = sample();
        assert_eq!(al.min_len, 2);
        assert_eq!(al.max_len, 4);
        assert_eq!(al.path_len, 4);
    }

    #[test]
    fn normalization_helpers() {
        let al = sample();
        assert!((al.normalized_by_max_len() - 1.5).abs() < 1e-12);
        assert!((al.normalized_by_path_len() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn serialized_shape() {
        let json: serde_json::Value = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["distance"], 6.0);
        assert_eq!(json["path"][2], serde_json::json!([2, 1]));
        assert_eq!(json["min_len"], 2);
        assert_eq!(json["max_len"], 4);
        assert_eq!(json["path_len"], 4);
    }
}
