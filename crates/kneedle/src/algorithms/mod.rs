//! Layer 3: Algorithms
//!
//! This layer implements the Kneedle pipeline stages: smoothing, normalization,
//! the difference transform, candidate search, and threshold confirmation.
//! It contains the numerical logic but is orchestrated by the engine layer.

// Gaussian smoothing over index neighbourhoods.
pub mod smoothing;

// Per-dimension min-max normalization.
pub mod normalization;

// Smoothing + normalization + difference transform.
pub mod transform;

// Detection mode and local extremum search.
pub mod extrema;

// Threshold step and candidate confirmation.
pub mod confirmation;
