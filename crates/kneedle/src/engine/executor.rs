//! Execution engine for Kneedle detection.
//!
//! ## Purpose
//!
//! This module orchestrates one detection run: it prepares the curve, searches
//! candidates, derives the threshold step, and confirms candidates. It is the
//! only place the pipeline stages are wired together.
//!
//! ## Design notes
//!
//! * Configuration-based entry point ([`KneedleExecutor::run_with_config`]).
//! * The smoothing pass is injectable so extension crates can parallelize it.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The curve handed in is non-empty, two-dimensional, and finite.
//! * Output indices refer to positions in that curve.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not map indices back to points (handled by the API).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::confirmation::{average_x_spacing, confirm_candidates, threshold_step};
use crate::algorithms::extrema::{find_candidate_indices, Mode};
use crate::algorithms::smoothing::smooth_pass;
use crate::algorithms::transform::prepare_curve;
use crate::primitives::curve::Curve;

pub use crate::algorithms::smoothing::SmoothPassFn;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a detection run.
#[derive(Debug, Clone, Copy)]
pub struct KneedleConfig<T> {
    /// Threshold scale relative to the average x spacing.
    pub sensitivity: T,

    /// Gaussian smoothing radius in index units.
    pub smoothing_window: usize,

    /// Knee or elbow detection.
    pub mode: Mode,

    /// Smoothing pass override (e.g. a parallel pass).
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,
}

/// Output from a detection run.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Prepared (smoothed, normalized, differenced) curve.
    pub transformed: Curve<T>,

    /// All candidate indices, ascending.
    pub candidates: Vec<usize>,

    /// Confirmed candidate indices, ascending.
    pub confirmed: Vec<usize>,

    /// Signed threshold step that was applied.
    pub step: T,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for Kneedle detection.
pub struct KneedleExecutor;

impl KneedleExecutor {
    /// Run the full pipeline on a validated curve.
    pub fn run_with_config<T: Float>(curve: &Curve<T>, config: &KneedleConfig<T>) -> ExecutorOutput<T> {
        let smooth = config.custom_smooth_pass.unwrap_or(smooth_pass::<T>);
        let transformed = prepare_curve(curve, config.smoothing_window, smooth);
        let points = transformed.points();

        let candidates = find_candidate_indices(points, config.mode.extremum());
        let step = threshold_step(
            average_x_spacing(points),
            config.sensitivity,
            config.mode,
        );
        let confirmed = confirm_candidates(points, &candidates, step, config.mode);

        debug!(
            n_points = points.len(),
            mode = config.mode.name(),
            candidates = candidates.len(),
            confirmed = confirmed.len(),
            "kneedle run complete"
        );

        ExecutorOutput {
            transformed,
            candidates,
            confirmed,
            step,
        }
    }
}
