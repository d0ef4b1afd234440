//! Warping path types for DTW alignment.

/// A single step in a warping path, matching index `a` in the first sequence
/// with index `b` in the second.
///
/// Serialized as an `[a, b]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct WarpingStep {
    /// Index in the first sequence.
    pub a: usize,
    /// Index in the second sequence.
    pub b: usize,
}

impl WarpingStep {
    /// Create a step matching `a` with `b`.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

impl From<(usize, usize)> for WarpingStep {
    fn from((a, b): (usize, usize)) -> Self {
        Self { a, b }
    }
}

impl From<WarpingStep> for (usize, usize) {
    fn from(step: WarpingStep) -> Self {
        (step.a, step.b)
    }
}

/// Ordered warping steps from `(0, 0)` to `(len_a - 1, len_b - 1)`.
///
/// Steps never decrease in either coordinate. A path produced with
/// [`TracebackMode::PrependOrigin`](crate::TracebackMode::PrependOrigin) may
/// jump from the origin to an edge cell, or repeat the origin; see
/// [`is_contiguous`](Self::is_contiguous).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct WarpingPath(Vec<WarpingStep>);

impl WarpingPath {
    pub(crate) fn new(steps: Vec<WarpingStep>) -> Self {
        Self(steps)
    }

    /// Return the warping steps as a slice.
    #[must_use]
    pub fn steps(&self) -> &[WarpingStep] {
        &self.0
    }

    /// Return the number of steps in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the path contains no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the first step, always `(0, 0)` for a computed path.
    #[must_use]
    pub fn first(&self) -> Option<WarpingStep> {
        self.0.first().copied()
    }

    /// Return the last step, always `(len_a - 1, len_b - 1)` for a computed path.
    #[must_use]
    pub fn last(&self) -> Option<WarpingStep> {
        self.0.last().copied()
    }

    /// Return true if no coordinate decreases between consecutive steps.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.0.windows(2).all(|w| w[1].a >= w[0].a && w[1].b >= w[0].b)
    }

    /// Return true if every consecutive pair advances by exactly one cell
    /// horizontally, vertically, or diagonally.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.0.windows(2).all(|w| {
            let da = w[1].a.wrapping_sub(w[0].a);
            let db = w[1].b.wrapping_sub(w[0].b);
            da <= 1 && db <= 1 && da + db >= 1
        })
    }

    /// Return the steps as `(a, b)` tuples.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.0.iter().map(|&s| s.into()).collect()
    }

    /// Consume and return the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<WarpingStep> {
        self.0
    }
}

impl<'a> IntoIterator for &'a WarpingPath {
    type Item = &'a WarpingStep;
    type IntoIter = std::slice::Iter<'a, WarpingStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(pairs: &[(usize, usize)]) -> WarpingPath {
        WarpingPath::new(pairs.iter().map(|&p| p.into()).collect())
    }

    #[test]
    fn diagonal_is_contiguous_and_monotonic() {
        let p = path(&[(0, 0), (1, 1), (2, 2)]);
        assert!(p.is_monotonic());
        assert!(p.is_contiguous());
    }

    #[test]
    fn origin_jump_is_monotonic_but_not_contiguous() {
        let p = path(&[(0, 0), (2, 0), (3, 1)]);
        assert!(p.is_monotonic());
        assert!(!p.is_contiguous());
    }

    #[test]
    fn repeated_origin_is_not_contiguous() {
        let p = path(&[(0, 0), (0, 0), (1, 1)]);
        assert!(p.is_monotonic());
        assert!(!p.is_contiguous());
    }

    #[test]
    fn backwards_step_is_not_monotonic() {
        let p = path(&[(0, 0), (1, 1), (0, 2)]);
        assert!(!p.is_monotonic());
        assert!(!p.is_contiguous());
    }

    #[test]
    fn endpoints() {
        let p = path(&[(0, 0), (1, 0), (1, 1)]);
        assert_eq!(p.first(), Some(WarpingStep::new(0, 0)));
        assert_eq!(p.last(), Some(WarpingStep::new(1, 1)));
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn serializes_as_pairs() {
        let p = path(&[(0, 0), (1, 2)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[[0,0],[1,2]]");
        let back: WarpingPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
