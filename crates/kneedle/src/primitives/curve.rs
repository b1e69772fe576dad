//! Point and curve value types.
//!
//! ## Purpose
//!
//! This module provides the two value types every stage of the pipeline
//! exchanges: a fixed two-coordinate [`Point`] and an ordered, non-empty
//! [`Curve`] of points.
//!
//! ## Design notes
//!
//! * **Checked once**: Dimensionality is validated when a curve is built from
//!   untyped rows; afterwards the type guarantees two coordinates per point.
//! * **Slice view**: `Point` implements `AsRef<[T]>` so curves can be fed to the
//!   dimension-generic smoothing and normalization routines without copying.
//!
//! ## Invariants
//!
//! * A `Curve` always holds at least one point.
//! * Point order is the caller's order; nothing is sorted.
//!
//! ## Non-goals
//!
//! * This module does not check that x is non-decreasing.
//! * This module does not check coordinates for finiteness (see the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter};
use core::ops::Index;
use core::slice::Iter;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KneedleError;

/// Number of coordinates in a curve point.
pub const POINT_DIMS: usize = 2;

// ============================================================================
// Point
// ============================================================================

/// A point on a 2-D curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T> {
    coords: [T; POINT_DIMS],
}

impl<T: Copy> Point<T> {
    /// Create a point from its coordinates.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { coords: [x, y] }
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// Both coordinates as an array.
    #[inline]
    pub fn coords(&self) -> [T; POINT_DIMS] {
        self.coords
    }

    /// Copy of this point with `y` replaced.
    #[inline]
    pub fn with_y(self, y: T) -> Self {
        Self::new(self.x(), y)
    }
}

impl<T> AsRef<[T]> for Point<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.coords
    }
}

impl<T> From<[T; POINT_DIMS]> for Point<T> {
    fn from(coords: [T; POINT_DIMS]) -> Self {
        Self { coords }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { coords: [x, y] }
    }
}

impl<T> From<Point<T>> for [T; POINT_DIMS] {
    fn from(p: Point<T>) -> Self {
        p.coords
    }
}

impl<T: Copy + Display> Display for Point<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

// ============================================================================
// Curve
// ============================================================================

/// An ordered, non-empty sequence of 2-D points.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve<T> {
    points: Vec<Point<T>>,
}

impl<T: Float> Curve<T> {
    /// Build a curve from untyped rows, checking that every row has exactly
    /// two coordinates.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, KneedleError> {
        if rows.is_empty() {
            return Err(KneedleError::EmptyInput);
        }

        let mut points = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != POINT_DIMS {
                return Err(KneedleError::DimensionMismatch {
                    index,
                    expected: POINT_DIMS,
                    got: row.len(),
                });
            }
            points.push(Point::new(row[0], row[1]));
        }

        Ok(Self { points })
    }

    /// Build a curve from typed points.
    pub fn from_points(points: Vec<Point<T>>) -> Result<Self, KneedleError> {
        if points.is_empty() {
            return Err(KneedleError::EmptyInput);
        }
        Ok(Self { points })
    }

    // Callers guarantee `points` is non-empty.
    pub(crate) fn from_points_unchecked(points: Vec<Point<T>>) -> Self {
        debug_assert!(!points.is_empty(), "curve must not be empty");
        Self { points }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a constructed curve; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points as a slice.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Iterate over the points in order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Point<T>> {
        self.points.iter()
    }

    /// All x coordinates.
    pub fn xs(&self) -> Vec<T> {
        self.points.iter().map(|p| p.x()).collect()
    }

    /// All y coordinates.
    pub fn ys(&self) -> Vec<T> {
        self.points.iter().map(|p| p.y()).collect()
    }

    /// Consume the curve and return its points.
    pub fn into_points(self) -> Vec<Point<T>> {
        self.points
    }
}

// ============================================================================
// Row Shape
// ============================================================================

/// Dimensionality shared by every row, for the dimension-generic stages.
///
/// `action` names the stage in the error message ("smooth", "normalize").
pub fn uniform_dims<T, R: AsRef<[T]>>(rows: &[R], action: &str) -> Result<usize, KneedleError> {
    let first = match rows.first() {
        Some(row) => row.as_ref().len(),
        None => return Err(KneedleError::InvalidInput(format!("cannot {action} empty data"))),
    };

    if first == 0 {
        return Err(KneedleError::InvalidInput(format!(
            "cannot {action} a data point with no values; every point needs 1 or more dimensions"
        )));
    }

    for (i, row) in rows.iter().enumerate().skip(1) {
        let got = row.as_ref().len();
        if got != first {
            return Err(KneedleError::InvalidInput(format!(
                "cannot {action} ragged data: point {i} has {got} values, expected {first}"
            )));
        }
    }

    Ok(first)
}

impl<T> Index<usize> for Curve<T> {
    type Output = Point<T>;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.points[idx]
    }
}

impl<'a, T> IntoIterator for &'a Curve<T> {
    type Item = &'a Point<T>;
    type IntoIter = Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
