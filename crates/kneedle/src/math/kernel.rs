//! Gaussian kernel used for index-based smoothing.
//!
//! ## Purpose
//!
//! This module provides the Gaussian function and the index-offset weights the
//! smoother derives from it. Offsets are measured in index units and divided by
//! the smoothing window, so the window radius maps to one standard deviation.
//!
//! ## Design notes
//!
//! * **Parameterised**: The general form `a * exp(-(x - b)^2 / (2 c^2))` is kept
//!   so the standard kernel is just one instance of it.
//! * **Generics**: Evaluated in the caller's `Float` type.
//!
//! ## Invariants
//!
//! * Weights are positive, symmetric in the offset, and equal to 1 at offset 0.
//! * A zero window yields the identity kernel (weight 1 at offset 0).
//!
//! ## Non-goals
//!
//! * This module does not normalize weights (the smoother divides by their sum).

// External dependencies
use num_traits::Float;

// ============================================================================
// Gaussian Function
// ============================================================================

/// Gaussian function `height * exp(-(x - center)^2 / (2 * width^2))`.
///
/// `width` is the standard deviation: about 68% of the mass lies within
/// `center ± width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian<T> {
    /// Value at the center of the curve.
    pub height: T,

    /// Position of the peak.
    pub center: T,

    /// Standard deviation.
    pub width: T,
}

impl<T: Float> Gaussian<T> {
    /// Standard kernel: height 1, center 0, width 1.
    #[inline]
    pub fn standard() -> Self {
        Self {
            height: T::one(),
            center: T::zero(),
            width: T::one(),
        }
    }

    /// Evaluate the function at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        let d = x - self.center;
        let two = T::one() + T::one();
        self.height * (-(d * d) / (two * self.width * self.width)).exp()
    }
}

impl<T: Float> Default for Gaussian<T> {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Index Weights
// ============================================================================

/// Weight of a neighbour `offset` indices away under a window of radius `window`.
///
/// Computes `exp(-(offset / window)^2 / 2)`.
#[inline]
pub fn index_weight<T: Float>(offset: usize, window: usize) -> T {
    if window == 0 {
        // Only offset 0 lies inside an empty window.
        return if offset == 0 { T::one() } else { T::zero() };
    }

    let u = T::from(offset).unwrap_or_else(T::zero) / T::from(window).unwrap_or_else(T::one);
    Gaussian::standard().evaluate(u)
}
