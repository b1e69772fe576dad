//! Tests for the high-level Kneedle API.
//!
//! These tests verify the public entry points:
//! - The one-call `run` function
//! - The builder and reusable detector
//! - Error reporting for malformed curves and parameters
//!
//! ## Test Organization
//!
//! 1. **Reference Scenario** - The knee example from the Kneedle paper
//! 2. **Elbow Detection** - Convex curves
//! 3. **Properties** - Determinism, sensitivity monotonicity, boundary exclusion
//! 4. **Builder** - Defaults, duplicates, optional outputs
//! 5. **Errors** - Empty, non-2-D, non-finite inputs

use approx::assert_abs_diff_eq;

use kneedle::prelude::*;

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

/// Convex, increasing curve with an elbow at x = 6.
fn convex_curve() -> Vec<[f64; 2]> {
    let ys = [0.0, 0.05, 0.1, 0.15, 0.2, 0.3, 0.5, 1.0, 2.0, 4.0];
    ys.iter()
        .enumerate()
        .map(|(i, &y)| [i as f64, y])
        .collect()
}

/// Wiggly curve with many local extrema in both directions.
fn zigzag_curve(n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            [x, (x * 0.9).sin() * 3.0 + (x * 2.3).cos() + 0.1 * x]
        })
        .collect()
}

// ============================================================================
// Reference Scenario
// ============================================================================

/// Test the paper example in knee mode.
///
/// Verifies that exactly one knee is found at (0.2, 0.75).
#[test]
fn test_run_paper_knee() {
    let knees = run(&paper_curve(), 1.0, 1, false).unwrap();

    assert_eq!(knees.len(), 1, "Paper example should have one knee");
    assert_abs_diff_eq!(knees[0].x(), 0.2, epsilon = 1e-5);
    assert_abs_diff_eq!(knees[0].y(), 0.75, epsilon = 1e-5);
}

/// Test that the builder route agrees with `run`.
///
/// Verifies indices, points, and candidate bookkeeping.
#[test]
fn test_builder_paper_knee() {
    let result = Kneedle::new()
        .sensitivity(1.0)
        .smoothing_window(1)
        .mode(Knee)
        .build()
        .unwrap()
        .fit(&paper_curve())
        .unwrap();

    assert_eq!(result.indices, vec![2]);
    assert_eq!(result.candidates, vec![2]);
    assert_eq!(result.points, run(&paper_curve(), 1.0, 1, false).unwrap());
    assert_eq!(result.n_points, 10);
    assert!(result.threshold_step < 0.0, "Knee steps are negative");
}

/// Test that returned points are original, untransformed coordinates.
#[test]
fn test_points_are_original_coordinates() {
    let curve = paper_curve();
    let knees = run(&curve, 1.0, 1, false).unwrap();

    assert_eq!(knees[0].coords(), curve[2]);
}

/// Test that the paper example has no elbow.
#[test]
fn test_paper_curve_has_no_elbow() {
    let elbows = run(&paper_curve(), 1.0, 1, true).unwrap();

    assert!(elbows.is_empty());
}

// ============================================================================
// Elbow Detection Tests
// ============================================================================

/// Test elbow detection on a convex curve without smoothing.
#[test]
fn test_run_convex_elbow() {
    let elbows = run(&convex_curve(), 1.0, 0, true).unwrap();

    assert_eq!(elbows.len(), 1);
    assert_eq!(elbows[0].coords(), [6.0, 0.5]);
}

/// Test that a high sensitivity rejects the elbow.
#[test]
fn test_convex_elbow_rejected_at_high_sensitivity() {
    let elbows = run(&convex_curve(), 10.0, 0, true).unwrap();

    assert!(elbows.is_empty());
}

/// Test that a convex curve has no knee.
#[test]
fn test_convex_curve_has_no_knee() {
    let knees = run(&convex_curve(), 1.0, 0, false).unwrap();

    assert!(knees.is_empty());
}

/// Test that a straight line has neither knees nor elbows.
#[test]
fn test_straight_line_is_empty() {
    let line: Vec<[f64; 2]> = (0..20).map(|i| [i as f64, 2.0 * i as f64 + 1.0]).collect();

    assert!(run(&line, 1.0, 2, false).unwrap().is_empty());
    assert!(run(&line, 1.0, 2, true).unwrap().is_empty());
}

/// Test that curves too short for an interior point return nothing.
#[test]
fn test_short_curves_are_empty() {
    assert!(run(&[[1.0, 2.0]], 1.0, 1, false).unwrap().is_empty());
    assert!(run(&[[1.0, 2.0], [2.0, 5.0]], 1.0, 1, true).unwrap().is_empty());
}

// ============================================================================
// Property Tests
// ============================================================================

/// Test that repeated runs are bit-identical.
#[test]
fn test_run_is_deterministic() {
    let curve = zigzag_curve(60);

    for find_elbows in [false, true] {
        let a = run(&curve, 0.5, 2, find_elbows).unwrap();
        let b = run(&curve, 0.5, 2, find_elbows).unwrap();

        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.x().to_bits(), pb.x().to_bits());
            assert_eq!(pa.y().to_bits(), pb.y().to_bits());
        }
    }
}

/// Test that raising the sensitivity never adds confirmations.
#[test]
fn test_sensitivity_is_monotonic() {
    let sensitivities = [0.0, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0];

    for curve in [paper_curve(), convex_curve(), zigzag_curve(80)] {
        for find_elbows in [false, true] {
            let counts: Vec<usize> = sensitivities
                .iter()
                .map(|&s| run(&curve, s, 1, find_elbows).unwrap().len())
                .collect();

            for pair in counts.windows(2) {
                assert!(
                    pair[1] <= pair[0],
                    "counts must not increase with sensitivity: {:?}",
                    counts
                );
            }
        }
    }
}

/// Test that candidates never include the first or last index.
#[test]
fn test_candidates_exclude_boundaries() {
    for n in [3, 4, 10, 57] {
        let curve = zigzag_curve(n);
        for mode in [Knee, Elbow] {
            for window in [0, 1, 3] {
                let result = Kneedle::new()
                    .smoothing_window(window)
                    .mode(mode)
                    .build()
                    .unwrap()
                    .fit(&curve)
                    .unwrap();

                assert!(result.candidates.iter().all(|&c| c > 0 && c < n - 1));
                assert!(result.candidates.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}

/// Test that confirmed indices are a subsequence of candidates.
#[test]
fn test_confirmed_subset_of_candidates() {
    let result = Kneedle::new()
        .sensitivity(0.2)
        .smoothing_window(1)
        .mode(Elbow)
        .build()
        .unwrap()
        .fit(&zigzag_curve(80))
        .unwrap();

    assert!(result.indices.iter().all(|i| result.candidates.contains(i)));
    assert_eq!(result.points.len(), result.scores.len());
}

/// Test detection in single precision.
#[test]
fn test_run_f32() {
    let curve: Vec<[f32; 2]> = paper_curve()
        .iter()
        .map(|p| [p[0] as f32, p[1] as f32])
        .collect();
    let knees = run(&curve, 1.0f32, 1, false).unwrap();

    assert_eq!(knees.len(), 1);
    assert_abs_diff_eq!(knees[0].x(), 0.2f32, epsilon = 1e-5);
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
#[test]
fn test_builder_defaults() {
    let detector = Kneedle::<f64>::new().build().unwrap();
    let config = detector.config();

    assert_eq!(config.sensitivity, 1.0);
    assert_eq!(config.smoothing_window, 3);
    assert_eq!(config.mode, Knee);
}

/// Test that setting a parameter twice is rejected.
#[test]
fn test_builder_duplicate_parameter() {
    let res = Kneedle::<f64>::new().sensitivity(1.0).sensitivity(2.0).build();
    assert!(matches!(
        res,
        Err(KneedleError::DuplicateParameter {
            parameter: "sensitivity"
        })
    ));

    let res = Kneedle::<f64>::new().mode(Knee).find_elbows(true).build();
    assert!(matches!(
        res,
        Err(KneedleError::DuplicateParameter { parameter: "mode" })
    ));
}

/// Test that invalid sensitivities are rejected at build time.
#[test]
fn test_builder_invalid_sensitivity() {
    assert_eq!(
        Kneedle::new().sensitivity(-1.0).build().unwrap_err(),
        KneedleError::InvalidSensitivity(-1.0)
    );
    assert!(matches!(
        Kneedle::new().sensitivity(f64::NAN).build(),
        Err(KneedleError::InvalidSensitivity(_))
    ));
    assert!(matches!(
        run(&paper_curve(), f64::INFINITY, 1, false),
        Err(KneedleError::InvalidSensitivity(_))
    ));
}

/// Test the optional prepared curve.
#[test]
fn test_return_transformed() {
    let result = Kneedle::new()
        .smoothing_window(1)
        .return_transformed()
        .build()
        .unwrap()
        .fit(&paper_curve())
        .unwrap();

    assert!(result.has_transformed());
    let transformed = result.transformed.as_ref().unwrap();
    assert_eq!(transformed.len(), 10);
    assert_abs_diff_eq!(transformed[0].x(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(transformed[9].x(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(transformed[0].y(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(transformed[9].y(), 0.0, epsilon = 1e-12);
    assert_eq!(result.scores[0], transformed[2].y());
    assert!(result.scores[0] > 0.0, "Knee scores are peaks of y - x");

    let without = Kneedle::new().build().unwrap().fit(&paper_curve()).unwrap();
    assert!(!without.has_transformed());
}

/// Test the strongest-point query.
#[test]
fn test_strongest_point() {
    let result = Kneedle::new()
        .smoothing_window(1)
        .build()
        .unwrap()
        .fit(&paper_curve())
        .unwrap();

    assert_eq!(result.strongest_index(), Some(0));
    assert_eq!(result.strongest(), Some(Point::new(0.2, 0.75)));

    let empty = Kneedle::new()
        .smoothing_window(1)
        .mode(Elbow)
        .build()
        .unwrap()
        .fit(&paper_curve())
        .unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.strongest(), None);
}

/// Test the human-readable summary.
#[test]
fn test_result_display() {
    let result = Kneedle::new()
        .smoothing_window(1)
        .build()
        .unwrap()
        .fit(&paper_curve())
        .unwrap();
    let text = format!("{}", result);

    assert!(text.contains("Data points:      10"));
    assert!(text.contains("Mode:             Knee"));
    assert!(text.contains("0.200000"));
    assert!(text.contains("0.750000"));
}

/// Test that a typed curve gives the same result as rows.
#[test]
fn test_fit_curve_matches_fit() {
    let rows = paper_curve();
    let points: Vec<Point<f64>> = rows.iter().map(|&r| Point::from(r)).collect();
    let curve = Curve::from_points(points).unwrap();
    let detector = Kneedle::new().smoothing_window(1).build().unwrap();

    assert_eq!(
        detector.fit_curve(&curve).unwrap(),
        detector.fit(&rows).unwrap()
    );
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test that an empty curve is rejected.
#[test]
fn test_run_empty_input() {
    let empty: Vec<[f64; 2]> = Vec::new();

    assert_eq!(run(&empty, 1.0, 1, true), Err(KneedleError::EmptyInput));
    assert_eq!(
        Curve::<f64>::from_points(Vec::new()),
        Err(KneedleError::EmptyInput)
    );
}

/// Test that a 3-D point is rejected.
#[test]
fn test_run_dimension_mismatch() {
    let res = run(&[[0.0, 0.0, 0.0]], 1.0, 1, true);

    assert_eq!(
        res,
        Err(KneedleError::DimensionMismatch {
            index: 0,
            expected: 2,
            got: 3
        })
    );
}

/// Test that the first non-2-D point is reported.
#[test]
fn test_run_ragged_rows() {
    let rows = vec![vec![0.0, 1.0], vec![1.0, 2.0], vec![2.0], vec![3.0, 4.0, 5.0]];

    assert_eq!(
        run(&rows, 1.0, 1, false),
        Err(KneedleError::DimensionMismatch {
            index: 2,
            expected: 2,
            got: 1
        })
    );
}

/// Test that non-finite coordinates are rejected.
#[test]
fn test_run_non_finite() {
    let mut curve = paper_curve();
    curve[4][1] = f64::NAN;

    assert!(matches!(
        run(&curve, 1.0, 1, false),
        Err(KneedleError::InvalidNumericValue(_))
    ));
}

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(KneedleError::EmptyInput.to_string(), "Input curve is empty");
    assert_eq!(
        KneedleError::DimensionMismatch {
            index: 3,
            expected: 2,
            got: 1
        }
        .to_string(),
        "Dimension mismatch: point 3 has 1 coordinates, expected 2"
    );
}
