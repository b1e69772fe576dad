//! High-level API for Kneedle detection.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the one-call [`run`]
//! function and a fluent builder that produces a reusable detector.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KneedleBuilder`] via `Kneedle::new()`.
//! 2. Chain configuration methods (`.sensitivity()`, `.smoothing_window()`, `.mode()`).
//! 3. Call `.build()` to get a [`KneedleDetector`], then `.fit(&curve)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{KneedleConfig, KneedleExecutor, SmoothPassFn};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::extrema::Mode;
pub use crate::algorithms::normalization::min_max_normalize;
pub use crate::algorithms::smoothing::gaussian_smooth;
pub use crate::algorithms::transform::prepare;
pub use crate::engine::output::KneedleResult;
pub use crate::primitives::curve::{Curve, Point};
pub use crate::primitives::errors::KneedleError;

/// Default sensitivity.
pub const DEFAULT_SENSITIVITY: f64 = 1.0;

/// Default smoothing window radius.
pub const DEFAULT_SMOOTHING_WINDOW: usize = 3;

// ============================================================================
// One-Call Entry Point
// ============================================================================

/// Detect knees (`find_elbows == false`) or elbows (`find_elbows == true`).
///
/// Returns the confirmed points in original coordinates, ascending by index.
///
/// ```rust
/// let curve = [[0.0, 0.0], [0.1, 0.55], [0.2, 0.75], [0.35, 0.825], [0.45, 0.875],
///              [0.55, 0.9], [0.675, 0.925], [0.775, 0.95], [0.875, 0.975], [1.0, 1.0]];
///
/// let knees = kneedle::run(&curve, 1.0, 1, false)?;
/// assert_eq!(knees.len(), 1);
/// assert_eq!(knees[0].coords(), [0.2, 0.75]);
/// # Result::<(), kneedle::prelude::KneedleError>::Ok(())
/// ```
pub fn run<T: Float, R: AsRef<[T]>>(
    curve: &[R],
    sensitivity: T,
    smoothing_window: usize,
    find_elbows: bool,
) -> Result<Vec<Point<T>>, KneedleError> {
    let detector = KneedleBuilder::new()
        .sensitivity(sensitivity)
        .smoothing_window(smoothing_window)
        .mode(Mode::from_find_elbows(find_elbows))
        .build()?;

    Ok(detector.fit(curve)?.points)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring Kneedle parameters.
#[derive(Debug, Clone)]
pub struct KneedleBuilder<T> {
    /// Threshold scale (default 1.0).
    pub sensitivity: Option<T>,

    /// Gaussian smoothing radius in index units (default 3).
    pub smoothing_window: Option<usize>,

    /// Knee or elbow detection (default knee).
    pub mode: Option<Mode>,

    /// Keep the prepared curve in the result.
    pub return_transformed: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom smooth pass function.
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KneedleBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KneedleBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            sensitivity: None,
            smoothing_window: None,
            mode: None,
            return_transformed: None,
            custom_smooth_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the sensitivity factor S.
    pub fn sensitivity(mut self, sensitivity: T) -> Self {
        if self.sensitivity.is_some() {
            self.duplicate_param = Some("sensitivity");
        }
        self.sensitivity = Some(sensitivity);
        self
    }

    /// Set the smoothing window radius (0 disables smoothing).
    pub fn smoothing_window(mut self, window: usize) -> Self {
        if self.smoothing_window.is_some() {
            self.duplicate_param = Some("smoothing_window");
        }
        self.smoothing_window = Some(window);
        self
    }

    /// Set the detection mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Set the detection mode from a `find_elbows` flag.
    pub fn find_elbows(self, find_elbows: bool) -> Self {
        self.mode(Mode::from_find_elbows(find_elbows))
    }

    /// Keep the prepared curve in the result.
    pub fn return_transformed(mut self) -> Self {
        self.return_transformed = Some(true);
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set a custom smooth pass function.
    #[doc(hidden)]
    pub fn custom_smooth_pass(mut self, pass: SmoothPassFn<T>) -> Self {
        self.custom_smooth_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build a detector.
    pub fn build(self) -> Result<KneedleDetector<T>, KneedleError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let sensitivity = self
            .sensitivity
            .unwrap_or_else(|| T::from(DEFAULT_SENSITIVITY).unwrap_or_else(T::one));
        Validator::validate_sensitivity(sensitivity)?;

        Ok(KneedleDetector {
            config: KneedleConfig {
                sensitivity,
                smoothing_window: self.smoothing_window.unwrap_or(DEFAULT_SMOOTHING_WINDOW),
                mode: self.mode.unwrap_or_default(),
                custom_smooth_pass: self.custom_smooth_pass,
            },
            return_transformed: self.return_transformed.unwrap_or(false),
        })
    }
}

// ============================================================================
// Detector
// ============================================================================

/// Configured, reusable Kneedle detector.
#[derive(Debug, Clone)]
pub struct KneedleDetector<T> {
    config: KneedleConfig<T>,
    return_transformed: bool,
}

impl<T: Float> KneedleDetector<T> {
    /// The validated configuration.
    pub fn config(&self) -> &KneedleConfig<T> {
        &self.config
    }

    /// Detect on untyped rows; every row must have exactly two coordinates.
    pub fn fit<R: AsRef<[T]>>(&self, data: &[R]) -> Result<KneedleResult<T>, KneedleError> {
        let curve = Curve::from_rows(data)?;
        self.fit_curve(&curve)
    }

    /// Detect on a typed curve.
    pub fn fit_curve(&self, curve: &Curve<T>) -> Result<KneedleResult<T>, KneedleError> {
        Validator::validate_curve(curve)?;

        let output = KneedleExecutor::run_with_config(curve, &self.config);
        let transformed = output.transformed;

        let points = output.confirmed.iter().map(|&i| curve[i]).collect();
        let scores = output.confirmed.iter().map(|&i| transformed[i].y()).collect();

        Ok(KneedleResult {
            points,
            indices: output.confirmed,
            scores,
            candidates: output.candidates,
            threshold_step: output.step,
            n_points: curve.len(),
            mode: self.config.mode,
            sensitivity: self.config.sensitivity,
            smoothing_window: self.config.smoothing_window,
            transformed: if self.return_transformed {
                Some(transformed)
            } else {
                None
            },
        })
    }
}
