//! Min-max normalization of every dimension into [0, 1].
//!
//! Each dimension is rescaled independently using its own minimum and maximum
//! over the whole curve, which makes the later difference transform and the
//! spacing-based threshold independent of the caller's units. A constant
//! dimension normalizes to all zeros.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::MinMax;
use crate::primitives::curve::{uniform_dims, Point};
use crate::primitives::errors::KneedleError;

/// Per-dimension bounds of rows with `dims` coordinates each.
pub fn dimension_bounds<T: Float, R: AsRef<[T]>>(data: &[R], dims: usize) -> Vec<MinMax<T>> {
    (0..dims)
        .filter_map(|d| MinMax::from_values(data.iter().map(|row| row.as_ref()[d])))
        .collect()
}

/// Normalize rows of any uniform, non-zero dimensionality.
pub fn min_max_normalize<T: Float, R: AsRef<[T]>>(data: &[R]) -> Result<Vec<Vec<T>>, KneedleError> {
    let dims = uniform_dims(data, "normalize")?;
    let bounds = dimension_bounds(data, dims);

    Ok(data
        .iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .zip(&bounds)
                .map(|(&v, b)| b.scale(v))
                .collect()
        })
        .collect())
}

/// Normalize curve points; both axes are rescaled independently.
pub fn normalize_points<T: Float>(points: &[Point<T>]) -> Vec<Point<T>> {
    let (Some(xb), Some(yb)) = (
        MinMax::from_values(points.iter().map(|p| p.x())),
        MinMax::from_values(points.iter().map(|p| p.y())),
    ) else {
        return Vec::new();
    };

    points
        .iter()
        .map(|p| Point::new(xb.scale(p.x()), yb.scale(p.y())))
        .collect()
}
