//! High-level API for Kneedle detection with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for fastKneedle.
//! It extends the `kneedle` builder with a parallel smoothing pass and accepts
//! any [`KneedleInput`], including `ndarray` matrices.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `kneedle` builder pattern.
//! * **Parallel-First**: Defaults to parallel smoothing.
//! * **Feature-Gated**: Parallelism is configurable via the `cpu` feature;
//!   without it the sequential pass is used.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelKneedleBuilder`] via `Kneedle::new()`.
//! 2. Chain configuration methods (`.sensitivity()`, `.smoothing_window()`, etc.).
//! 3. Call `.build()` and then `.fit(&data)` on the detector.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::smooth_pass_parallel;

// External dependencies
use num_traits::Float;
use std::result::Result;
use tracing::debug;

// Export dependencies from kneedle crate
use kneedle::internals::api::{KneedleBuilder, KneedleDetector};
use kneedle::internals::engine::executor::KneedleConfig;

// Internal dependencies
use crate::input::KneedleInput;

// Publicly re-exported types
pub use kneedle::internals::algorithms::extrema::Mode;
pub use kneedle::internals::engine::output::KneedleResult;
pub use kneedle::internals::primitives::curve::{Curve, Point};
pub use kneedle::internals::primitives::errors::KneedleError;

// ============================================================================
// One-Call Entry Point
// ============================================================================

/// Detect knees (`find_elbows == false`) or elbows (`find_elbows == true`)
/// with parallel smoothing.
pub fn run<T, I>(
    curve: &I,
    sensitivity: T,
    smoothing_window: usize,
    find_elbows: bool,
) -> Result<Vec<Point<T>>, KneedleError>
where
    T: Float + Send + Sync,
    I: KneedleInput<T> + ?Sized,
{
    let detector = ParallelKneedleBuilder::new()
        .sensitivity(sensitivity)
        .smoothing_window(smoothing_window)
        .find_elbows(find_elbows)
        .build()?;

    Ok(detector.fit(curve)?.points)
}

// ============================================================================
// Extended Kneedle Builder
// ============================================================================

/// Builder for a Kneedle detector with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelKneedleBuilder<T: Float> {
    /// Base builder from the kneedle crate
    pub base: KneedleBuilder<T>,

    /// Whether to smooth in parallel (fastKneedle extension)
    pub parallel: bool,
}

impl<T: Float> Default for ParallelKneedleBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelKneedleBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from kneedle KneedleBuilder
    /// * parallel: true (fastKneedle extension)
    pub fn new() -> Self {
        Self {
            base: KneedleBuilder::new(),
            parallel: true,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the sensitivity factor S.
    pub fn sensitivity(mut self, sensitivity: T) -> Self {
        self.base = self.base.sensitivity(sensitivity);
        self
    }

    /// Set the smoothing window radius (0 disables smoothing).
    pub fn smoothing_window(mut self, window: usize) -> Self {
        self.base = self.base.smoothing_window(window);
        self
    }

    /// Set the detection mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.base = self.base.mode(mode);
        self
    }

    /// Set the detection mode from a `find_elbows` flag.
    pub fn find_elbows(mut self, find_elbows: bool) -> Self {
        self.base = self.base.find_elbows(find_elbows);
        self
    }

    /// Keep the prepared curve in the result.
    pub fn return_transformed(mut self) -> Self {
        self.base = self.base.return_transformed();
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build a detector.
    pub fn build(self) -> Result<ParallelKneedleDetector<T>, KneedleError>
    where
        T: Send + Sync,
    {
        #[cfg(feature = "cpu")]
        let base = if self.parallel {
            self.base.custom_smooth_pass(smooth_pass_parallel::<T>)
        } else {
            self.base
        };

        #[cfg(not(feature = "cpu"))]
        let base = {
            if self.parallel {
                debug!("cpu feature disabled; falling back to sequential smoothing");
            }
            self.base
        };

        let detector = base.build()?;
        debug!(
            parallel = self.parallel && cfg!(feature = "cpu"),
            smoothing_window = detector.config().smoothing_window,
            "built fastKneedle detector"
        );

        Ok(ParallelKneedleDetector {
            base: detector,
            parallel: self.parallel,
        })
    }
}

// ============================================================================
// Detector
// ============================================================================

/// Configured, reusable Kneedle detector with parallel smoothing.
#[derive(Debug, Clone)]
pub struct ParallelKneedleDetector<T> {
    base: KneedleDetector<T>,
    parallel: bool,
}

impl<T: Float> ParallelKneedleDetector<T> {
    /// The validated configuration.
    pub fn config(&self) -> &KneedleConfig<T> {
        self.base.config()
    }

    /// Whether parallel smoothing was requested.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Detect on any supported input.
    pub fn fit<I>(&self, input: &I) -> Result<KneedleResult<T>, KneedleError>
    where
        I: KneedleInput<T> + ?Sized,
    {
        let curve = input.to_kneedle_curve()?;
        self.base.fit_curve(&curve)
    }
}
