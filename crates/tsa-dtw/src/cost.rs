//! Full DTW cost matrix with boundary row and column.

use crate::distance::DtwDistance;
use crate::metric::PointwiseDistance;

/// Accumulated cost table of shape `(n + 1) × (m + 1)` for sequences of
/// lengths `n` and `m`.
///
/// Row 0 and column 0 are the boundary: `+∞` everywhere except `[0][0] = 0`.
/// Cell `[i + 1][j + 1]` holds the minimum cost of aligning `a[..=i]` with
/// `b[..=j]`. Stored row-major in a single flat vector.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Fill the table row by row using
    /// `C[i+1][j+1] = d(a[i], b[j]) + min(C[i][j], C[i][j+1], C[i+1][j])`.
    pub(crate) fn fill<M: PointwiseDistance + ?Sized>(a: &[f64], b: &[f64], metric: &M) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut data = vec![f64::INFINITY; rows * cols];
        data[0] = 0.0;

        for (i, &x) in a.iter().enumerate() {
            let up = i * cols;
            let here = (i + 1) * cols;
            for (j, &y) in b.iter().enumerate() {
                let best = data[up + j].min(data[up + j + 1]).min(data[here + j]);
                data[here + j + 1] = metric.distance(x, y) + best;
            }
        }

        Self { rows, cols, data }
    }

    /// Length of the first sequence (`rows - 1`).
    #[must_use]
    pub fn len_a(&self) -> usize {
        self.rows - 1
    }

    /// Length of the second sequence (`cols - 1`).
    #[must_use]
    pub fn len_b(&self) -> usize {
        self.cols - 1
    }

    /// Return `(rows, cols)` including the boundary.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Return the boundary-inclusive cell `[row][col]`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        assert!(col < self.cols, "column {col} out of bounds for {} columns", self.cols);
        self.data[row * self.cols + col]
    }

    /// Return the accumulated cost of aligning `a[..=i]` with `b[..=j]`,
    /// i.e. the boundary-stripped cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len_a()` or `j >= len_b()`.
    #[must_use]
    pub fn cumulative(&self, i: usize, j: usize) -> f64 {
        self.get(i + 1, j + 1)
    }

    /// Total alignment cost, the bottom-right cell.
    #[must_use]
    pub fn distance(&self) -> DtwDistance {
        DtwDistance::new(self.data[self.rows * self.cols - 1])
    }

    /// Return one boundary-inclusive row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}
