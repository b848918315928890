//! Validation error taxonomy
//!
//! Every failure in this crate is a construction-time configuration error:
//! once a generator is built successfully, running it is total. Invalid
//! configuration is treated as a programmer error — errors surface
//! immediately and descriptively, and nothing is silently corrected.

use thiserror::Error;

/// Errors raised when constructing a generator from invalid options
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// `max` is below `min`
    #[error("invalid range: min ({min}) must not exceed max ({max})")]
    EmptyRange { min: f64, max: f64 },

    /// A bound that must be non-negative is negative
    #[error("range must be non-negative: got min {min}")]
    NegativeBound { min: f64 },

    /// A bound that must be non-positive is positive
    #[error("range must be non-positive: got max {max}")]
    PositiveBound { max: f64 },

    /// Bias target falls outside the sampling window
    #[error("bias ({bias}) must lie inside the range [{min}, {max}]")]
    BiasOutsideRange { bias: f64, min: f64, max: f64 },

    /// Influence must be a proportion
    #[error("influence ({influence}) must lie inside [0, 1]")]
    InfluenceOutOfRange { influence: f64 },

    /// Presence probability must be a proportion
    #[error("presence ({presence}) must lie inside [0, 1]")]
    PresenceOutOfRange { presence: f64 },

    /// Index selection over an empty domain
    #[error("size must be at least 1, got {size}")]
    SizeTooSmall { size: usize },

    /// Weight table length does not match the number of alternatives
    #[error("distribution has {weights} weights but {alternatives} alternatives")]
    WeightCountMismatch { weights: usize, alternatives: usize },

    /// A weight is negative
    #[error("distribution weight {index} is negative ({weight})")]
    NegativeWeight { index: usize, weight: f64 },

    /// Weights do not sum to 1
    #[error("distribution weights must sum to 1, got {sum}")]
    WeightSumMismatch { sum: f64 },

    /// Character range touches codepoints that are not Unicode scalars
    #[error("character range [{min}, {max}] overlaps invalid codepoints")]
    InvalidCharRange { min: u32, max: u32 },
}
