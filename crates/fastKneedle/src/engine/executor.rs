//! Parallel execution engine for Kneedle detection.
//!
//! ## Purpose
//!
//! This module provides the parallel smoothing pass that is injected into the
//! `kneedle` crate's execution engine. Smoothing is the only stage whose cost
//! grows with both the number of points and the window radius, so it is the
//! stage worth spreading across CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential smoothing pass.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Per-index kernel**: Each output point is computed independently by the
//!   same `smooth_at` routine the sequential pass uses.
//! * **Integration**: Plugs into the `kneedle` executor via the `SmoothPassFn` hook.
//!
//! ## Invariants
//!
//! * Output has the same length and order as the input.
//! * Output is bit-identical to the sequential pass.
//!
//! ## Non-goals
//!
//! * This module does not parallelize candidate search or confirmation; both
//!   are a single linear scan.
//! * This module does not validate input data (handled by `validator`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from kneedle crate
use kneedle::internals::algorithms::smoothing::smooth_at;
use kneedle::internals::primitives::curve::{Point, POINT_DIMS};

// ============================================================================
// Parallel Smoothing Function
// ============================================================================

/// Perform a single smoothing pass over all points in parallel.
#[cfg(feature = "cpu")]
pub fn smooth_pass_parallel<T>(points: &[Point<T>], window: usize) -> Vec<Point<T>>
where
    T: Float + Send + Sync,
{
    if points.is_empty() {
        return Vec::new();
    }

    (0..points.len())
        .into_par_iter()
        .map(|i| {
            let mut buf = [T::zero(); POINT_DIMS];
            smooth_at(points, i, window, &mut buf);
            Point::from(buf)
        })
        .collect()
}
