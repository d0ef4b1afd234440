//! Pairwise DTW distances for a collection of sequences.

use crate::distance::DtwDistance;

/// Symmetric distance matrix stored as a packed lower triangle.
///
/// Holds `n*(n-1)/2` distances; the diagonal is implicitly zero and
/// `get(i, j) == get(j, i)`.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<DtwDistance>,
}

/// Packed offset of `(row, col)` with `row > col`.
fn packed(row: usize, col: usize) -> usize {
    row * (row - 1) / 2 + col
}

/// Inverse of [`packed`]: recover `(row, col)` from a flat offset.
pub(crate) fn unpack(flat: usize) -> (usize, usize) {
    let mut row = ((1.0 + (1.0 + 8.0 * flat as f64).sqrt()) / 2.0).floor() as usize;
    // Guard against rounding in the square root for large offsets.
    while packed(row, 0) > flat {
        row -= 1;
    }
    while packed(row + 1, 0) <= flat {
        row += 1;
    }
    (row, flat - packed(row, 0))
}

impl DistanceMatrix {
    pub(crate) fn from_packed(n: usize, data: Vec<DtwDistance>) -> Self {
        debug_assert_eq!(data.len(), n * n.saturating_sub(1) / 2);
        Self { n, data }
    }

    /// Return the number of sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Return true if the matrix covers no sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Return the distance between sequences `i` and `j`; zero on the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()` or `j >= len()`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> DtwDistance {
        assert!(i < self.n, "row index {i} out of bounds for {} sequences", self.n);
        assert!(j < self.n, "column index {j} out of bounds for {} sequences", self.n);
        match i.cmp(&j) {
            std::cmp::Ordering::Equal => DtwDistance::new(0.0),
            std::cmp::Ordering::Greater => self.data[packed(i, j)],
            std::cmp::Ordering::Less => self.data[packed(j, i)],
        }
    }

    /// Iterate over `(i, j, distance)` for every pair with `i > j`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, DtwDistance)> + '_ {
        self.data.iter().enumerate().map(|(flat, &d)| {
            let (i, j) = unpack(flat);
            (i, j, d)
        })
    }

    /// Expand into a dense `n × n` matrix of raw values.
    #[must_use]
    pub fn to_square(&self) -> Vec<Vec<f64>> {
        (0..self.n)
            .map(|i| (0..self.n).map(|j| self.get(i, j).value()).collect())
            .collect()
    }
}
