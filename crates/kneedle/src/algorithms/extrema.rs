//! Local extremum search on the prepared curve.
//!
//! ## Purpose
//!
//! This module defines the detection [`Mode`] and finds candidate indices: the
//! strict local extrema of the prepared curve's y values. Knees appear as
//! local maxima of `y - x`, elbows as local minima.
//!
//! ## Design notes
//!
//! * **Strict comparisons**: A plateau never yields a candidate.
//! * **Interior only**: Indices 0 and N-1 lack a neighbour and are never candidates.
//!
//! ## Invariants
//!
//! * Candidates are returned in ascending index order.
//! * Every candidate `i` satisfies `1 <= i <= N - 2`.
//!
//! ## Non-goals
//!
//! * This module does not decide whether a candidate is a genuine knee
//!   (see the confirmation module).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::curve::Point;

// ============================================================================
// Detection Mode
// ============================================================================

/// What kind of point to detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Concave knees: local maxima of the prepared curve.
    #[default]
    Knee,

    /// Convex elbows: local minima of the prepared curve.
    Elbow,
}

impl Mode {
    /// Map the boolean `find_elbows` flag onto a mode.
    #[inline]
    pub const fn from_find_elbows(find_elbows: bool) -> Self {
        if find_elbows {
            Mode::Elbow
        } else {
            Mode::Knee
        }
    }

    /// `true` for [`Mode::Elbow`].
    #[inline]
    pub const fn finds_elbows(&self) -> bool {
        matches!(self, Mode::Elbow)
    }

    /// Get the name of the mode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Mode::Knee => "Knee",
            Mode::Elbow => "Elbow",
        }
    }

    /// The kind of extremum this mode searches for.
    #[inline]
    pub const fn extremum(&self) -> Extremum {
        match self {
            Mode::Knee => Extremum::Maxima,
            Mode::Elbow => Extremum::Minima,
        }
    }
}

// ============================================================================
// Candidate Search
// ============================================================================

/// Kind of strict local extremum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Both neighbours are strictly lower.
    Maxima,

    /// Both neighbours are strictly higher.
    Minima,
}

impl Extremum {
    /// Whether `cur` is an extremum of this kind between `prev` and `next`.
    #[inline]
    pub fn matches<T: Float>(&self, prev: T, cur: T, next: T) -> bool {
        match self {
            Extremum::Maxima => prev < cur && next < cur,
            Extremum::Minima => prev > cur && next > cur,
        }
    }
}

/// Indices of all strict local extrema of the given kind, by y value.
pub fn find_candidate_indices<T: Float>(points: &[Point<T>], extremum: Extremum) -> Vec<usize> {
    points
        .windows(3)
        .enumerate()
        .filter(|(_, w)| extremum.matches(w[0].y(), w[1].y(), w[2].y()))
        .map(|(i, _)| i + 1)
        .collect()
}

/// Index of the value with the largest magnitude; the first one wins ties.
///
/// Returns `None` for an empty slice.
pub fn find_strongest_index<T: Float>(values: &[T]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let mut best_idx = 0;
    let mut best_score = T::zero();
    for (i, v) in values.iter().enumerate() {
        let score = v.abs();
        if score > best_score {
            best_score = score;
            best_idx = i;
        }
    }

    Some(best_idx)
}
