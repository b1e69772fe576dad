//! Output types and result structures for Kneedle operations.
//!
//! ## Purpose
//!
//! This module defines [`KneedleResult`], which carries the confirmed knee or
//! elbow points together with the intermediate data that explains them.
//!
//! ## Design notes
//!
//! * **Original coordinates**: `points` are copies of input points, never
//!   smoothed or normalized values.
//! * **Optional outputs**: The prepared curve is only kept when requested.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `points`, `indices`, and `scores` have the same length and share order.
//! * `indices` is ascending and a subsequence of `candidates`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond simple queries.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::extrema::{find_strongest_index, Mode};
use crate::primitives::curve::{Curve, Point};

// ============================================================================
// Result Structure
// ============================================================================

/// Knee/elbow detection output.
#[derive(Debug, Clone, PartialEq)]
pub struct KneedleResult<T> {
    /// Confirmed points, in original coordinates, ascending by index.
    pub points: Vec<Point<T>>,

    /// Input positions of the confirmed points.
    pub indices: Vec<usize>,

    /// Prepared-curve value (`y - x` after smoothing and normalization) at
    /// each confirmed index.
    pub scores: Vec<T>,

    /// Every candidate extremum considered, confirmed or not.
    pub candidates: Vec<usize>,

    /// Signed threshold step applied to candidates.
    pub threshold_step: T,

    /// Number of points in the input curve.
    pub n_points: usize,

    /// Detection mode used.
    pub mode: Mode,

    /// Sensitivity used.
    pub sensitivity: T,

    /// Smoothing window used.
    pub smoothing_window: usize,

    /// Prepared curve, when requested.
    pub transformed: Option<Curve<T>>,
}

impl<T: Float> KneedleResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of confirmed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no point was confirmed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if the prepared curve was kept.
    pub fn has_transformed(&self) -> bool {
        self.transformed.is_some()
    }

    /// Position in `points` of the most pronounced confirmed point.
    pub fn strongest_index(&self) -> Option<usize> {
        find_strongest_index(&self.scores)
    }

    /// The confirmed point with the largest score magnitude.
    pub fn strongest(&self) -> Option<Point<T>> {
        self.strongest_index().map(|i| self.points[i])
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for KneedleResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points:      {}", self.n_points)?;
        writeln!(f, "  Mode:             {}", self.mode.name())?;
        writeln!(f, "  Sensitivity:      {}", self.sensitivity)?;
        writeln!(f, "  Smoothing window: {}", self.smoothing_window)?;
        writeln!(f, "  Candidates:       {}", self.candidates.len())?;
        writeln!(f, "  Confirmed:        {}", self.points.len())?;
        writeln!(f)?;

        writeln!(f, "{} Points:", self.mode.name())?;
        writeln!(f, "{:>8} {:>12} {:>12} {:>12}", "Index", "X", "Y", "Score")?;
        writeln!(f, "{:-<width$}", "", width = 47)?;

        if self.points.is_empty() {
            writeln!(f, "{:>8}", "(none)")?;
        }

        for ((p, idx), score) in self.points.iter().zip(&self.indices).zip(&self.scores) {
            writeln!(
                f,
                "{:>8} {:>12.6} {:>12.6} {:>12.6}",
                idx,
                p.x(),
                p.y(),
                *score
            )?;
        }

        Ok(())
    }
}
