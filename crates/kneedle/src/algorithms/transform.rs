//! Curve preparation: smoothing, normalization, and the difference transform.
//!
//! ## Purpose
//!
//! This module turns a raw curve into the curve extrema are searched on. After
//! smoothing and normalizing both axes, every y is replaced by `y - x`. On the
//! result a concave knee shows up as a local maximum and a convex elbow as a
//! local minimum, whatever the scale or slope direction of the input.
//!
//! ## Invariants
//!
//! * The prepared curve has as many points as the input.
//! * Prepared x values are the normalized smoothed x values, in [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not locate or confirm extrema.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::normalization::normalize_points;
use crate::algorithms::smoothing::{smooth_pass, SmoothPassFn};
use crate::primitives::curve::{Curve, Point};
use crate::primitives::errors::KneedleError;

/// Replace each y with `y - x`.
pub fn difference_points<T: Float>(points: Vec<Point<T>>) -> Vec<Point<T>> {
    points
        .into_iter()
        .map(|p| p.with_y(p.y() - p.x()))
        .collect()
}

/// Prepare a typed curve using the given smoothing pass.
pub fn prepare_curve<T: Float>(
    curve: &Curve<T>,
    window: usize,
    smooth: SmoothPassFn<T>,
) -> Curve<T> {
    let smoothed = smooth(curve.points(), window);
    let normalized = normalize_points(&smoothed);
    Curve::from_points_unchecked(difference_points(normalized))
}

/// Prepare raw 2-D rows for extremum detection.
///
/// Fails with `EmptyInput` or `DimensionMismatch` when the rows do not form a
/// 2-D curve.
pub fn prepare<T: Float, R: AsRef<[T]>>(data: &[R], window: usize) -> Result<Curve<T>, KneedleError> {
    let curve = Curve::from_rows(data)?;
    Ok(prepare_curve(&curve, window, smooth_pass))
}
