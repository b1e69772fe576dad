//! Threshold-based confirmation of candidate extrema.
//!
//! ## Purpose
//!
//! This module separates genuine knees and elbows from noise. The threshold
//! step is the average x spacing of the prepared curve scaled by the
//! sensitivity; a candidate is confirmed once the curve after it moves past
//! `y[candidate] + step` before the next candidate is reached.
//!
//! ## Design notes
//!
//! * **Greedy**: The first crossing confirms; there is no global search.
//! * **Half-open ranges**: A candidate's scan stops before the next candidate's
//!   own index (or at the end of the curve for the last candidate).
//! * **Signed step**: Knee steps are negative (values must fall below the
//!   threshold); elbow steps are positive (values must rise above it).
//!
//! ## Invariants
//!
//! * Confirmed indices are a subsequence of the candidates, in the same order.
//! * A larger sensitivity never confirms more candidates on a curve with
//!   non-decreasing x.
//!
//! ## Non-goals
//!
//! * This module does not find candidates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::algorithms::extrema::Mode;
use crate::primitives::curve::Point;

// ============================================================================
// Threshold Step
// ============================================================================

/// Average spacing between consecutive x values.
///
/// Sums `x[i + 1] - x[i]` for `i` in `[0, N - 2)` and divides by `N - 1`.
/// Curves with fewer than two points have zero spacing.
pub fn average_x_spacing<T: Float>(points: &[Point<T>]) -> T {
    let n = points.len();
    if n < 2 {
        return T::zero();
    }

    let mut sum = T::zero();
    for i in 0..n - 2 {
        sum = sum + (points[i + 1].x() - points[i].x());
    }

    sum / T::from(n - 1).unwrap_or_else(T::one)
}

/// Signed threshold offset for the given mode.
#[inline]
pub fn threshold_step<T: Float>(avg_spacing: T, sensitivity: T, mode: Mode) -> T {
    match mode {
        Mode::Elbow => avg_spacing * sensitivity,
        Mode::Knee => avg_spacing * -sensitivity,
    }
}

// ============================================================================
// Confirmation
// ============================================================================

#[inline]
fn crosses<T: Float>(value: T, threshold: T, mode: Mode) -> bool {
    match mode {
        Mode::Elbow => value > threshold,
        Mode::Knee => value < threshold,
    }
}

/// Keep the candidates whose following segment crosses their threshold.
pub fn confirm_candidates<T: Float>(
    points: &[Point<T>],
    candidates: &[usize],
    step: T,
    mode: Mode,
) -> Vec<usize> {
    let mut confirmed = Vec::new();

    for (k, &c) in candidates.iter().enumerate() {
        let end = candidates.get(k + 1).copied().unwrap_or(points.len());
        let threshold = points[c].y() + step;

        let hit = points
            .iter()
            .enumerate()
            .take(end)
            .skip(c + 1)
            .find(|(_, p)| crosses(p.y(), threshold, mode))
            .map(|(j, _)| j);

        match hit {
            Some(j) => {
                trace!(candidate = c, crossed_at = j, "candidate confirmed");
                confirmed.push(c);
            }
            None => trace!(candidate = c, scan_end = end, "candidate rejected"),
        }
    }

    confirmed
}
