//! Gaussian kernel smoothing over index neighbourhoods.
//!
//! ## Purpose
//!
//! This module denoises a curve so that local extrema found later are not
//! artifacts of sampling noise. Every point is replaced by the kernel-weighted
//! average of itself and its neighbours within `±window` index positions.
//!
//! ## Design notes
//!
//! * **Index distance**: Neighbours are weighted by how many positions away
//!   they are, not by their x distance.
//! * **Truncated windows**: Near the ends fewer neighbours contribute; weights
//!   are normalized by their own sum, so no padding or reflection is needed.
//! * **Shared kernel**: [`smooth_at`] computes one output row and is reused by
//!   the sequential pass here and by parallel passes in extension crates.
//!
//! ## Invariants
//!
//! * Output has the same number of points and dimensions as the input.
//! * `window == 0` leaves every value unchanged.
//!
//! ## Non-goals
//!
//! * This module does not reorder or filter points.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::index_weight;
use crate::primitives::curve::{uniform_dims, Point, POINT_DIMS};
use crate::primitives::errors::KneedleError;

/// Signature of a full smoothing pass over curve points.
///
/// Extension crates supply their own (e.g. parallel) pass with this shape; it
/// must return the same values as [`smooth_pass`].
pub type SmoothPassFn<T> = fn(&[Point<T>], usize) -> Vec<Point<T>>;

// ============================================================================
// Per-Index Kernel
// ============================================================================

/// Weighted average of the rows around `idx`, written into `out`.
///
/// `out` must have the rows' dimensionality and `data` must be non-empty.
pub fn smooth_at<T: Float, R: AsRef<[T]>>(data: &[R], idx: usize, window: usize, out: &mut [T]) {
    let n = data.len();
    let start = idx.saturating_sub(window);
    let end = idx.saturating_add(window).min(n - 1);

    out.fill(T::zero());
    let mut weight_sum = T::zero();

    for (j, row) in data.iter().enumerate().take(end + 1).skip(start) {
        let w: T = index_weight(j.abs_diff(idx), window);
        for (acc, &v) in out.iter_mut().zip(row.as_ref()) {
            *acc = *acc + w * v;
        }
        weight_sum = weight_sum + w;
    }

    // The centre contributes weight 1, so the sum is never zero.
    for acc in out.iter_mut() {
        *acc = *acc / weight_sum;
    }
}

// ============================================================================
// Smoothing Passes
// ============================================================================

/// Smooth rows of any uniform, non-zero dimensionality.
pub fn gaussian_smooth<T: Float, R: AsRef<[T]>>(
    data: &[R],
    window: usize,
) -> Result<Vec<Vec<T>>, KneedleError> {
    let dims = uniform_dims(data, "smooth")?;

    let mut smoothed = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        let mut row = vec![T::zero(); dims];
        smooth_at(data, i, window, &mut row);
        smoothed.push(row);
    }

    Ok(smoothed)
}

/// Sequential smoothing pass over curve points.
pub fn smooth_pass<T: Float>(points: &[Point<T>], window: usize) -> Vec<Point<T>> {
    if points.is_empty() {
        return Vec::new();
    }

    (0..points.len())
        .map(|i| {
            let mut buf = [T::zero(); POINT_DIMS];
            smooth_at(points, i, window, &mut buf);
            Point::from(buf)
        })
        .collect()
}
