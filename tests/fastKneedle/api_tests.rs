//! Tests for the fastKneedle API.
//!
//! These tests verify that:
//! - Every supported input format produces the same detection
//! - Parallel and sequential smoothing give identical results
//! - Builder settings are forwarded to the base detector
//! - Shape errors from each input format are reported correctly
//!
//! ## Test Organization
//!
//! 1. **Inputs** - Slices, arrays, vectors, curves, ndarray matrices
//! 2. **Parallel Consistency** - Bit-identical results across backends
//! 3. **Builder** - Delegation, defaults, duplicates
//! 4. **Errors** - Empty and malformed inputs

use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};

use fastKneedle::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Knee example used in "Finding a Kneedle in a Haystack".
fn paper_curve() -> Vec<[f64; 2]> {
    vec![
        [0.0, 0.0],
        [0.1, 0.55],
        [0.2, 0.75],
        [0.35, 0.825],
        [0.45, 0.875],
        [0.55, 0.9],
        [0.675, 0.925],
        [0.775, 0.95],
        [0.875, 0.975],
        [1.0, 1.0],
    ]
}

/// Saturating curve with a deterministic ripple.
fn rippled_curve(n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| {
            let x = i as f64 / n as f64 * 8.0;
            [x, 1.0 - (-x).exp() + 0.02 * (x * 7.0).sin()]
        })
        .collect()
}

/// Compare two results field by field, bit for bit.
fn assert_same_result(a: &KneedleResult<f64>, b: &KneedleResult<f64>) {
    assert_eq!(a.indices, b.indices);
    assert_eq!(a.candidates, b.candidates);
    assert_eq!(a.threshold_step.to_bits(), b.threshold_step.to_bits());
    for (sa, sb) in a.scores.iter().zip(&b.scores) {
        assert_eq!(sa.to_bits(), sb.to_bits());
    }
}

// ============================================================================
// Input Tests
// ============================================================================

/// Test the paper example from an ndarray matrix.
#[test]
fn test_fit_ndarray() {
    let curve = array![
        [0.0, 0.0],
        [0.1, 0.55],
        [0.2, 0.75],
        [0.35, 0.825],
        [0.45, 0.875],
        [0.55, 0.9],
        [0.675, 0.925],
        [0.775, 0.95],
        [0.875, 0.975],
        [1.0, 1.0]
    ];
    let result = Kneedle::new()
        .smoothing_window(1)
        .build()
        .unwrap()
        .fit(&curve)
        .unwrap();

    assert_eq!(result.indices, vec![2]);
    assert_abs_diff_eq!(result.points[0].x(), 0.2, epsilon = 1e-5);
    assert_abs_diff_eq!(result.points[0].y(), 0.75, epsilon = 1e-5);
}

/// Test that all input formats agree.
#[test]
fn test_input_formats_agree() {
    let rows = paper_curve();
    let detector = Kneedle::new().smoothing_window(1).build().unwrap();

    let from_vec = detector.fit(&rows).unwrap();
    let from_slice = detector.fit(rows.as_slice()).unwrap();
    let from_array = detector
        .fit(&[
            [0.0, 0.0],
            [0.1, 0.55],
            [0.2, 0.75],
            [0.35, 0.825],
            [0.45, 0.875],
            [0.55, 0.9],
            [0.675, 0.925],
            [0.775, 0.95],
            [0.875, 0.975],
            [1.0, 1.0],
        ])
        .unwrap();
    let nested: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
    let from_nested = detector.fit(&nested).unwrap();
    let points: Vec<Point<f64>> = rows.iter().map(|&r| Point::from(r)).collect();
    let from_points = detector.fit(points.as_slice()).unwrap();
    let curve = Curve::from_points(points).unwrap();
    let from_curve = detector.fit(&curve).unwrap();
    let matrix = Array2::from_shape_vec((10, 2), rows.concat()).unwrap();
    let from_matrix = detector.fit(&matrix).unwrap();

    for other in [
        &from_slice,
        &from_array,
        &from_nested,
        &from_points,
        &from_curve,
        &from_matrix,
    ] {
        assert_eq!(&from_vec, other);
    }
}

/// Test a non-contiguous ndarray view.
#[test]
fn test_fit_ndarray_transposed_view() {
    let rows = paper_curve();
    // Columns are points; the transpose is a strided view.
    let columns = Array2::from_shape_fn((2, 10), |(d, i)| rows[i][d]);
    let view = columns.t();

    let result = Kneedle::new()
        .smoothing_window(1)
        .build()
        .unwrap()
        .fit(&view)
        .unwrap();

    assert_eq!(result.indices, vec![2]);
}

/// Test the one-call entry point.
#[test]
fn test_run() {
    let knees = run(&paper_curve(), 1.0, 1, false).unwrap();
    assert_eq!(knees, vec![Point::new(0.2, 0.75)]);

    let elbows = fastKneedle::run(&paper_curve(), 1.0, 1, true).unwrap();
    assert!(elbows.is_empty());
}

/// Test that results match the base crate.
#[test]
fn test_matches_base_crate() {
    for n in [5, 40, 250] {
        let curve = rippled_curve(n);
        for find_elbows in [false, true] {
            let base = kneedle::run(&curve, 0.5, 3, find_elbows).unwrap();
            let fast = run(&curve, 0.5, 3, find_elbows).unwrap();
            assert_eq!(base, fast);
        }
    }
}

// ============================================================================
// Parallel Consistency Tests
// ============================================================================

/// Test that parallel and sequential smoothing are bit-identical.
#[test]
fn test_parallel_matches_sequential() {
    for n in [3, 17, 500, 2_000] {
        let curve = rippled_curve(n);
        for window in [0, 1, 4, 25] {
            for mode in [Knee, Elbow] {
                let build = |parallel: bool| {
                    Kneedle::new()
                        .sensitivity(0.3)
                        .smoothing_window(window)
                        .mode(mode)
                        .return_transformed()
                        .parallel(parallel)
                        .build()
                        .unwrap()
                };

                let seq = build(false).fit(&curve).unwrap();
                let par = build(true).fit(&curve).unwrap();

                assert_same_result(&seq, &par);
                let (ts, tp) = (seq.transformed.unwrap(), par.transformed.unwrap());
                for (ps, pp) in ts.iter().zip(tp.iter()) {
                    assert_eq!(ps.x().to_bits(), pp.x().to_bits());
                    assert_eq!(ps.y().to_bits(), pp.y().to_bits());
                }
            }
        }
    }
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
#[test]
fn test_builder_defaults() {
    let detector = Kneedle::<f64>::new().build().unwrap();

    assert!(detector.is_parallel());
    assert_eq!(detector.config().sensitivity, 1.0);
    assert_eq!(detector.config().smoothing_window, 3);
    assert_eq!(detector.config().mode, Knee);
}

/// Test that settings reach the base detector.
#[test]
fn test_builder_delegation() {
    let detector = Kneedle::new()
        .sensitivity(2.5)
        .smoothing_window(0)
        .find_elbows(true)
        .parallel(false)
        .build()
        .unwrap();

    assert!(!detector.is_parallel());
    assert_eq!(detector.config().sensitivity, 2.5);
    assert_eq!(detector.config().smoothing_window, 0);
    assert_eq!(detector.config().mode, Elbow);
}

/// Test that duplicates are caught by the base builder.
#[test]
fn test_builder_duplicate_parameter() {
    let res = Kneedle::<f64>::new()
        .smoothing_window(1)
        .smoothing_window(2)
        .build();

    assert!(matches!(
        res,
        Err(KneedleError::DuplicateParameter {
            parameter: "smoothing_window"
        })
    ));
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test empty inputs of each format.
#[test]
fn test_empty_inputs() {
    let detector = Kneedle::<f64>::new().build().unwrap();

    let empty_rows: Vec<[f64; 2]> = Vec::new();
    assert_eq!(detector.fit(&empty_rows), Err(KneedleError::EmptyInput));

    let empty_matrix = Array2::<f64>::zeros((0, 2));
    assert_eq!(detector.fit(&empty_matrix), Err(KneedleError::EmptyInput));
}

/// Test matrices with the wrong number of columns.
#[test]
fn test_ndarray_wrong_width() {
    let detector = Kneedle::<f64>::new().build().unwrap();
    let wide = Array2::<f64>::zeros((4, 3));

    assert_eq!(
        detector.fit(&wide),
        Err(KneedleError::DimensionMismatch {
            index: 0,
            expected: 2,
            got: 3
        })
    );
}

/// Test that non-finite values are rejected for ndarray input.
#[test]
fn test_ndarray_non_finite() {
    let mut matrix = Array2::from_shape_vec((10, 2), paper_curve().concat()).unwrap();
    matrix[[3, 1]] = f64::NAN;

    assert!(matches!(
        run(&matrix, 1.0, 1, false),
        Err(KneedleError::InvalidNumericValue(_))
    ));
}
