//! Input abstractions for Kneedle detection.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for Kneedle inputs, allowing the
//! `fit` method to process multiple data formats (row slices, vectors, arrays,
//! typed curves, ndarray matrices) through a single interface.
//!
//! ## Design notes
//!
//! * **Interoperability**: Bridges standard Rust collections with `ndarray`.
//! * **Fail-fast validation**: Shape problems are reported before any work.
//! * **Copying**: Every input is copied into a [`Curve`]; views need not be
//!   contiguous.
//!
//! ## Key concepts
//!
//! * **KneedleInput Trait**: The core abstraction; types convert themselves
//!   into a typed curve of 2-D points.
//! * **Row layout**: Each row (or matrix row) is one `(x, y)` point.
//!
//! ## Invariants
//!
//! * An empty input is `EmptyInput`.
//! * A row or matrix width other than 2 is `DimensionMismatch`.
//!
//! ## Non-goals
//!
//! * This module does not check values for finiteness (handled by the detector).
//! * This module does not reorder or deduplicate points.

// External dependencies
use ndarray::{ArrayBase, Data, Ix2};
use num_traits::Float;

// Export dependencies from kneedle crate
use kneedle::internals::primitives::curve::{Curve, Point, POINT_DIMS};
use kneedle::internals::primitives::errors::KneedleError;

/// Trait for types that can be used as input for Kneedle detection.
pub trait KneedleInput<T: Float> {
    /// Convert the input to a typed curve.
    fn to_kneedle_curve(&self) -> Result<Curve<T>, KneedleError>;
}

impl<T: Float, R: AsRef<[T]>> KneedleInput<T> for [R] {
    fn to_kneedle_curve(&self) -> Result<Curve<T>, KneedleError> {
        Curve::from_rows(self)
    }
}

impl<T: Float, R: AsRef<[T]>, const N: usize> KneedleInput<T> for [R; N] {
    fn to_kneedle_curve(&self) -> Result<Curve<T>, KneedleError> {
        Curve::from_rows(self.as_slice())
    }
}

impl<T: Float, R: AsRef<[T]>> KneedleInput<T> for Vec<R> {
    fn to_kneedle_curve(&self) -> Result<Curve<T>, KneedleError> {
        Curve::from_rows(self.as_slice())
    }
}

impl<T: Float> KneedleInput<T> for Curve<T> {
    fn to_kneedle_curve(&self) -> Result<Curve<T>, KneedleError> {
        Ok(self.clone())
    }
}

impl<T: Float, S> KneedleInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn to_kneedle_curve(&self) -> Result<Curve<T>, KneedleError> {
        if self.nrows() == 0 {
            return Err(KneedleError::EmptyInput);
        }
        if self.ncols() != POINT_DIMS {
            return Err(KneedleError::DimensionMismatch {
                index: 0,
                expected: POINT_DIMS,
                got: self.ncols(),
            });
        }

        let points = self
            .rows()
            .into_iter()
            .map(|row| Point::new(row[0], row[1]))
            .collect();
        Curve::from_points(points)
    }
}
