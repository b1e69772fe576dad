//! Min-max bounds for rescaling values into [0, 1].
//!
//! This module tracks the observed range of one dimension and maps values
//! through `(v - min) / (max - min)`. A dimension whose values are all equal
//! has no range; every value in it maps to zero.

// External dependencies
use num_traits::Float;

// Observed minimum and maximum of a single dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax<T> {
    // Smallest value seen.
    pub min: T,

    // Largest value seen.
    pub max: T,
}

impl<T: Float> MinMax<T> {
    // Bounds of the given values, or `None` when there are none.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Option<Self> {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for v in iter {
            bounds.include(v);
        }
        Some(bounds)
    }

    // Widen the bounds to cover `v`.
    #[inline]
    pub fn include(&mut self, v: T) {
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
    }

    // Width of the range.
    #[inline]
    pub fn range(&self) -> T {
        self.max - self.min
    }

    // Rescale `v` into [0, 1]; a zero-width range maps everything to 0.
    #[inline]
    pub fn scale(&self, v: T) -> T {
        let range = self.range();
        if range <= T::zero() {
            return T::zero();
        }
        (v - self.min) / range
    }
}
