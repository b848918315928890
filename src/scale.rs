//! Range scaling and bias
//!
//! Raw seeds live in `[0, 2^32)`; everything numeric the crate produces
//! comes from mapping that interval linearly onto a caller-supplied target
//! window. Three pieces live here:
//!
//! - [`Scaler`]: a positive linear map between a source and a non-negative
//!   target interval.
//! - [`scale_signed`]: scaling into a target that may straddle zero, done by
//!   splitting the target into a non-negative upper half and a mirrored
//!   non-negative lower half, scaling the same source value into each, and
//!   subtracting. A naive single linear map across a sign-crossing interval
//!   invites sign errors when the source domain is strictly non-negative
//!   (the seed always is).
//! - [`mix`]: the soft bias blend used by skewed numeric generators.

use crate::error::ValidationError;
use crate::Result;
use serde::{Deserialize, Serialize};

/// A closed numeric interval with `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Create a range, rejecting `max < min`
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if max < min {
            return Err(ValidationError::EmptyRange { min, max }.into());
        }
        Ok(Range { min, max })
    }

    /// Create a range without validation
    ///
    /// Caller guarantees `min <= max`.
    pub const fn of(min: f64, max: f64) -> Self {
        Range { min, max }
    }

    /// Interval width
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `x` lies inside the closed interval
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

/// Saturate `x` into the closed interval; values already in range pass
/// through unchanged
pub fn clamp(x: f64, range: Range) -> f64 {
    x.max(range.min).min(range.max)
}

/// Linear map from a source interval onto a non-negative target interval
///
/// # Example
///
/// ```
/// use seedling::{Range, Scaler};
///
/// let scaler = Scaler::new(Range::of(0.0, 10.0), Range::of(0.0, 100.0)).unwrap();
/// assert_eq!(scaler.scale(5.0), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    source: Range,
    target: Range,
}

impl Scaler {
    /// Create a scaler, rejecting invalid intervals and negative targets
    pub fn new(source: Range, target: Range) -> Result<Self> {
        if source.max < source.min {
            return Err(ValidationError::EmptyRange {
                min: source.min,
                max: source.max,
            }
            .into());
        }
        if target.max < target.min {
            return Err(ValidationError::EmptyRange {
                min: target.min,
                max: target.max,
            }
            .into());
        }
        if target.min < 0.0 {
            return Err(ValidationError::NegativeBound { min: target.min }.into());
        }
        Ok(Scaler { source, target })
    }

    /// Create a scaler without validation
    ///
    /// Caller guarantees both intervals are well-formed and the target is
    /// non-negative.
    pub const fn of(source: Range, target: Range) -> Self {
        Scaler { source, target }
    }

    /// Map `x` from the source interval onto the target interval
    ///
    /// A zero-width source is a single-point domain: the map is undefined
    /// as a quotient, so the scaler returns `target.min` instead of
    /// dividing by zero.
    pub fn scale(&self, x: f64) -> f64 {
        scale_between(x, self.source, self.target)
    }
}

/// Shared linear-map kernel; ranges are assumed well-formed.
fn scale_between(x: f64, source: Range, target: Range) -> f64 {
    if source.width() == 0.0 {
        log::debug!(
            "scaling from single-point domain [{}, {}]: returning target min",
            source.min,
            source.max
        );
        return target.min;
    }
    target.width() * (x - source.min) / source.width() + target.min
}

/// Map `x` from a non-negative source interval into a target that may
/// straddle zero
///
/// The target splits into its non-negative upper part and its mirrored
/// non-negative lower part (`min..0` flipped to `0..-min`); the same `x`
/// scales independently into each half and the halves subtract.
pub fn scale_signed(x: f64, source: Range, target: Range) -> f64 {
    let upper = Range::of(target.min.max(0.0), target.max.max(0.0));
    let lower = Range::of((-target.max).max(0.0), (-target.min).max(0.0));
    scale_between(x, source, upper) - scale_between(x, source, lower)
}

/// Soft pull of `unbiased` toward `bias`, proportional to `mix`
///
/// `mix = 0` reproduces the unbiased value exactly; `mix = 1` lands on the
/// bias point.
pub fn mix(unbiased: f64, bias: f64, mix: f64) -> f64 {
    unbiased * (1.0 - mix) + bias * mix
}
