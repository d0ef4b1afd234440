//! Accuracy regression tests for tsa-dtw.
//!
//! Reference values match an unnormalized DTW with the same boundary
//! conditions and tie-breaking; they are hardcoded to catch regressions in
//! the matrix fill or the traceback.

use tsa_dtw::{Dtw, SquaredDifference, TimeSeries, TracebackMode, WarpingStep};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ts(values: &[f64]) -> TimeSeries {
    TimeSeries::new(values.to_vec()).expect("valid test series")
}

fn reference_pair() -> (TimeSeries, TimeSeries) {
    (
        TimeSeries::from_integers(&[0, 0, 1, 1, 2, 4, 2, 1, 2, 0]).unwrap(),
        TimeSeries::from_integers(&[1, 1, 1, 2, 2, 2, 2, 3, 2, 0]).unwrap(),
    )
}

fn regression_pairs() -> Vec<(TimeSeries, TimeSeries)> {
    vec![
        (ts(&[0.0, 0.0, 0.0]), ts(&[1.0, 1.0, 1.0])),                     // constant offset
        (ts(&[0.0, 1.0, 0.0]), ts(&[0.0, 0.0, 0.0])),                     // single peak
        (ts(&[1.0, 2.0, 3.0, 4.0]), ts(&[1.0, 2.0, 3.0, 4.0])),           // identical
        (ts(&[1.0, 2.0, 3.0]), ts(&[3.0, 2.0, 1.0])),                     // reversed
        (ts(&[0.0, 5.0, 0.0, 5.0]), ts(&[5.0, 0.0, 5.0, 0.0])),           // alternating
        (ts(&[1.0]), ts(&[5.0])),                                         // single point
        (ts(&[0.0, 0.0, 1.0]), ts(&[1.0, 0.0, 0.0])),                     // shifted peak
        (ts(&[0.0, 1.0, 2.0, 3.0, 4.0]), ts(&[0.0, 0.0, 0.0, 0.0, 4.0])), // late ramp
        (ts(&[10.0, 10.0, 10.0]), ts(&[10.1, 9.9, 10.0])),                // tiny perturbation
        (ts(&[0.0, 3.0, 0.0, 3.0, 0.0]), ts(&[3.0, 0.0, 3.0, 0.0, 3.0])), // opposite phase
    ]
}

// ---------------------------------------------------------------------------
// a) reference vector
// ---------------------------------------------------------------------------

#[test]
fn reference_distance_is_four() {
    let (x, y) = reference_pair();
    assert_eq!(Dtw::new().distance(x.as_view(), y.as_view()).value(), 4.0);
}

#[test]
fn reference_alignment_matches_known_path() {
    let (x, y) = reference_pair();
    let al = Dtw::new().align(x.as_view(), y.as_view());

    assert_eq!(al.distance.value(), 4.0);
    assert_eq!(
        al.path.to_pairs(),
        vec![
            (0, 0),
            (1, 0),
            (2, 1),
            (3, 2),
            (4, 3),
            (4, 4),
            (4, 5),
            (4, 6),
            (5, 7),
            (6, 8),
            (7, 8),
            (8, 8),
            (9, 9),
        ]
    );
    assert_eq!(al.min_len, 10);
    assert_eq!(al.max_len, 10);
    assert_eq!(al.path_len, 13);
    assert!(al.path.is_monotonic());
    assert!(al.path_len >= al.max_len);
}

#[test]
fn reference_alignment_swapped_inputs() {
    let (x, y) = reference_pair();
    let al = Dtw::new().align(y.as_view(), x.as_view());
    assert_eq!(al.distance.value(), 4.0);
    assert_eq!(
        al.path.to_pairs(),
        vec![
            (0, 0),
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 4),
            (5, 4),
            (6, 4),
            (7, 5),
            (8, 6),
            (8, 7),
            (8, 8),
            (9, 9),
        ]
    );
}

#[test]
fn reference_distance_under_squared_metric() {
    let (x, y) = reference_pair();
    let dtw = Dtw::with_metric(SquaredDifference);
    assert_eq!(dtw.distance(x.as_view(), y.as_view()).value(), 4.0);
}

// ---------------------------------------------------------------------------
// b) known distances
// ---------------------------------------------------------------------------

#[test]
fn distances_match_known_values() {
    let expected_abs = [3.0, 1.0, 0.0, 4.0, 10.0, 4.0, 2.0, 4.0, 0.2, 6.0];
    let expected_sq = [3.0, 1.0, 0.0, 8.0, 50.0, 16.0, 2.0, 6.0, 0.02, 18.0];

    let abs = Dtw::new();
    let sq = Dtw::with_metric(SquaredDifference);
    for (i, (a, b)) in regression_pairs().iter().enumerate() {
        let d_abs = abs.distance(a.as_view(), b.as_view()).value();
        let d_sq = sq.distance(a.as_view(), b.as_view()).value();
        assert!(
            (d_abs - expected_abs[i]).abs() < 1e-10,
            "pair {i}: got {d_abs:.15}, expected {}",
            expected_abs[i]
        );
        assert!(
            (d_sq - expected_sq[i]).abs() < 1e-10,
            "pair {i}: got {d_sq:.15}, expected {}",
            expected_sq[i]
        );
    }
}

// ---------------------------------------------------------------------------
// c) traceback edge cases on unequal lengths
// ---------------------------------------------------------------------------

#[test]
fn prepend_origin_on_unequal_lengths() {
    let long = ts(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let short = ts(&[1.0, 3.0, 5.0]);
    let dtw = Dtw::new();

    let al = dtw.align(long.as_view(), short.as_view());
    assert_eq!(al.distance.value(), 3.0);
    assert_eq!(al.path.to_pairs(), vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
    assert_eq!((al.min_len, al.max_len, al.path_len), (3, 6, 6));

    let al = dtw.align(short.as_view(), long.as_view());
    assert_eq!(al.path.to_pairs(), vec![(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)]);
}

#[test]
fn prepend_origin_can_skip_edge_cells() {
    let a = ts(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    let b = ts(&[0.0, 4.0]);
    let al = Dtw::new().align(a.as_view(), b.as_view());
    assert_eq!(al.distance.value(), 4.0);
    assert_eq!(al.path.to_pairs(), vec![(0, 0), (2, 0), (3, 1), (4, 1)]);
    assert!(al.path.is_monotonic());
    assert!(!al.path.is_contiguous());
    assert!(al.path_len < al.max_len);
}

#[test]
fn walk_to_origin_fills_skipped_edge_cells() {
    let a = ts(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    let b = ts(&[0.0, 4.0]);
    let dtw = Dtw::new().with_traceback(TracebackMode::WalkToOrigin);
    let al = dtw.align(a.as_view(), b.as_view());
    assert_eq!(al.distance.value(), 4.0);
    assert_eq!(al.path.to_pairs(), vec![(0, 0), (1, 0), (2, 0), (3, 1), (4, 1)]);
    assert!(al.path.is_contiguous());
    assert_eq!(al.path_len, 5);
}

#[test]
fn traceback_modes_agree_when_walk_ends_beside_origin() {
    let (x, y) = reference_pair();
    let prepend = Dtw::new().align(x.as_view(), y.as_view());
    let walk = Dtw::new()
        .with_traceback(TracebackMode::WalkToOrigin)
        .align(x.as_view(), y.as_view());
    assert_eq!(prepend, walk);
}

// ---------------------------------------------------------------------------
// d) distance-only and full modes agree
// ---------------------------------------------------------------------------

#[test]
fn distance_matches_alignment_and_cost_matrix() {
    let dtw = Dtw::new();
    for (i, (a, b)) in regression_pairs().iter().enumerate() {
        let rolling = dtw.distance(a.as_view(), b.as_view());
        let full = dtw.align(a.as_view(), b.as_view());
        let matrix = dtw.cost_matrix(a.as_view(), b.as_view());
        assert_eq!(rolling, full.distance, "pair {i}");
        assert_eq!(rolling, matrix.distance(), "pair {i}");
        assert_eq!(full.path.last(), Some(WarpingStep::new(a.len() - 1, b.len() - 1)));
        assert_eq!(full.path.first(), Some(WarpingStep::new(0, 0)));
    }
}
