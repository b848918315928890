//! Derived numeric generators
//!
//! Everything here composes [`Gen::from_seed`] with the scaling machinery
//! in [`crate::scale`]: a decimal in the unit interval, bounded
//! non-negative and non-positive samplers with optional bias, and signed
//! integer/number samplers.
//!
//! # Options
//!
//! Bounded samplers take a [`NumberOptions`]: a target [`Range`] plus a
//! [`Bias`]. Bias and influence travel together as one tagged variant, so
//! a half-set pair cannot be represented. Checked constructors validate at
//! construction time and return descriptive errors; every constructor has
//! an `_unchecked` escape hatch for hot paths where the caller guarantees
//! validity.
//!
//! # Example
//!
//! ```
//! use seedling::{positive, NumberOptions, Range, State};
//!
//! let gen = positive(NumberOptions::new(Range::new(3.0, 9.0).unwrap())).unwrap();
//! let value = gen.run(State::new(1_357_954_837));
//! assert!(value >= 3.0 && value <= 9.0);
//! ```

use crate::error::ValidationError;
use crate::gen::Gen;
use crate::scale::{clamp, mix, scale_signed, Range, Scaler};
use crate::Result;
use serde::{Deserialize, Serialize};

/// The source domain every seed draw lives in: `[0, 2^32 - 1]`.
pub(crate) const SEED_RANGE: Range = Range::of(0.0, u32::MAX as f64);

/// Optional pull toward a target value
///
/// The interdependent `bias`/`influence` pair is a single variant: either
/// both are present or neither is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bias {
    /// No skew; the raw scaled distribution.
    #[default]
    Unbiased,
    /// Soft pull toward `bias`, proportional to `influence` in `[0, 1]`.
    ///
    /// The pull is probabilistic, not a hard clamp: each draw samples a
    /// mix proportion and blends `unbiased * (1 - m) + bias * m`.
    Towards { bias: f64, influence: f64 },
}

/// Options for the bounded numeric samplers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberOptions {
    /// Target sampling window.
    pub range: Range,
    /// Optional skew toward a point inside the window.
    #[serde(default)]
    pub bias: Bias,
}

impl NumberOptions {
    /// Unbiased options over `range`
    pub fn new(range: Range) -> Self {
        NumberOptions {
            range,
            bias: Bias::Unbiased,
        }
    }

    /// Biased options over `range`
    pub fn biased(range: Range, bias: f64, influence: f64) -> Self {
        NumberOptions {
            range,
            bias: Bias::Towards { bias, influence },
        }
    }
}

impl Default for NumberOptions {
    fn default() -> Self {
        NumberOptions::new(Range::of(0.0, 1.0))
    }
}

fn validate_bias(bias: Bias, range: Range) -> Result<()> {
    if let Bias::Towards { bias, influence } = bias {
        if !range.contains(bias) {
            return Err(ValidationError::BiasOutsideRange {
                bias,
                min: range.min,
                max: range.max,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&influence) {
            return Err(ValidationError::InfluenceOutOfRange { influence }.into());
        }
    }
    Ok(())
}

/// Decimal in the unit interval: `seed / (2^32 - 1)`
pub fn decimal() -> Gen<f64> {
    Gen::from_seed(|seed| f64::from(seed) / f64::from(u32::MAX))
}

/// Bounded non-negative sampler
///
/// Validates `0 <= min <= max`, the bias point inside the window, and the
/// influence inside `[0, 1]`.
pub fn positive(options: NumberOptions) -> Result<Gen<f64>> {
    let range = options.range;
    if range.max < range.min {
        return Err(ValidationError::EmptyRange {
            min: range.min,
            max: range.max,
        }
        .into());
    }
    if range.min < 0.0 {
        return Err(ValidationError::NegativeBound { min: range.min }.into());
    }
    validate_bias(options.bias, range)?;
    Ok(positive_unchecked(options))
}

/// [`positive`] without validation
pub fn positive_unchecked(options: NumberOptions) -> Gen<f64> {
    let scaler = Scaler::of(SEED_RANGE, options.range);
    let base = Gen::from_seed(move |seed| scaler.scale(f64::from(seed)));
    match options.bias {
        Bias::Unbiased => base,
        Bias::Towards { bias, influence } => base.and_then(move |unbiased| {
            decimal().map(move |m| mix(unbiased, bias, m * influence))
        }),
    }
}

/// Bounded non-positive sampler
///
/// Defined as [`positive`] over the mirrored window, negated; validation
/// requires `min <= max <= 0` and the bias point inside the window.
pub fn negative(options: NumberOptions) -> Result<Gen<f64>> {
    let range = options.range;
    if range.max < range.min {
        return Err(ValidationError::EmptyRange {
            min: range.min,
            max: range.max,
        }
        .into());
    }
    if range.max > 0.0 {
        return Err(ValidationError::PositiveBound { max: range.max }.into());
    }
    validate_bias(options.bias, range)?;
    Ok(negative_unchecked(options))
}

/// [`negative`] without validation
pub fn negative_unchecked(options: NumberOptions) -> Gen<f64> {
    let mirrored = NumberOptions {
        range: Range::of(-options.range.max, -options.range.min),
        bias: match options.bias {
            Bias::Unbiased => Bias::Unbiased,
            Bias::Towards { bias, influence } => Bias::Towards {
                bias: -bias,
                influence,
            },
        },
    };
    positive_unchecked(mirrored).map(|value| -value)
}

/// Whole-number sampler over an arbitrary signed window
pub fn integer(range: Range) -> Result<Gen<i64>> {
    if range.max < range.min {
        return Err(ValidationError::EmptyRange {
            min: range.min,
            max: range.max,
        }
        .into());
    }
    Ok(integer_unchecked(range))
}

/// [`integer`] without validation
pub fn integer_unchecked(range: Range) -> Gen<i64> {
    Gen::from_seed(move |seed| {
        let scaled = scale_signed(f64::from(seed), SEED_RANGE, range);
        // Rounding can step half a unit past a fractional bound.
        clamp(scaled.round(), range) as i64
    })
}

/// Fractional sampler over an arbitrary signed window
///
/// Sums a whole-number part and a decimal draw, clamped into the window;
/// consumes two seed steps per value.
pub fn number(range: Range) -> Result<Gen<f64>> {
    if range.max < range.min {
        return Err(ValidationError::EmptyRange {
            min: range.min,
            max: range.max,
        }
        .into());
    }
    Ok(number_unchecked(range))
}

/// [`number`] without validation
pub fn number_unchecked(range: Range) -> Gen<f64> {
    integer_unchecked(range)
        .and_then(move |whole| decimal().map(move |fraction| clamp(whole as f64 + fraction, range)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;

    const SCENARIO_SEED: u32 = 1_357_954_837;

    #[test]
    fn test_decimal_unit_interval() {
        let gen = decimal();
        for value in gen.range(State::new(SCENARIO_SEED), 200) {
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_decimal_scenario_reproducible() {
        let gen = decimal();
        let value = gen.run(State::new(SCENARIO_SEED));
        assert!(value > 0.0 && value < 1.0);
        assert_eq!(value, gen.run(State::new(SCENARIO_SEED)));
    }

    #[test]
    fn test_positive_containment() {
        let range = Range::of(3.0, 9.0);
        let gen = positive(NumberOptions::new(range)).unwrap();
        for value in gen.range(State::new(42), 200) {
            assert!(range.contains(value), "{} outside {:?}", value, range);
        }
    }

    #[test]
    fn test_positive_zero_influence_matches_unbiased() {
        let range = Range::of(0.0, 100.0);
        let unbiased = positive(NumberOptions::new(range)).unwrap();
        let biased = positive(NumberOptions::biased(range, 80.0, 0.0)).unwrap();

        let state = State::new(SCENARIO_SEED);
        // Influence 0 reproduces the unbiased values exactly (the biased
        // chain still consumes an extra seed step per draw, so compare one
        // draw at a time from the same state).
        assert_eq!(unbiased.run(state), biased.run(state));
    }

    #[test]
    fn test_positive_bias_pulls_mean() {
        let range = Range::of(0.0, 100.0);
        let unbiased = positive(NumberOptions::new(range)).unwrap();
        let biased = positive(NumberOptions::biased(range, 95.0, 1.0)).unwrap();

        let state = State::new(42);
        let mean = |values: Vec<f64>| values.iter().sum::<f64>() / values.len() as f64;
        let unbiased_mean = mean(unbiased.range(state, 400));
        let biased_mean = mean(biased.range(state, 400));
        assert!(
            biased_mean > unbiased_mean,
            "bias toward 95 should raise the mean: {} vs {}",
            biased_mean,
            unbiased_mean
        );
        // Bias is a soft pull; values stay inside the window.
        for value in biased.range(state, 400) {
            assert!(range.contains(value));
        }
    }

    #[test]
    fn test_positive_validation_rejections() {
        assert!(positive(NumberOptions::new(Range::of(-1.0, 5.0))).is_err());
        assert!(positive(NumberOptions::new(Range::of(5.0, 1.0))).is_err());
        assert!(positive(NumberOptions::biased(Range::of(0.0, 10.0), 50.0, 0.5)).is_err());
        assert!(positive(NumberOptions::biased(Range::of(0.0, 10.0), 5.0, 1.5)).is_err());
        assert!(positive(NumberOptions::biased(Range::of(0.0, 10.0), 5.0, -0.1)).is_err());
    }

    #[test]
    fn test_unchecked_skips_validation() {
        // Caller-guaranteed validity is not re-checked.
        let gen = positive_unchecked(NumberOptions::new(Range::of(2.0, 2.0)));
        assert_eq!(gen.run(State::new(7)), 2.0);
    }

    #[test]
    fn test_negative_containment() {
        let range = Range::of(-9.0, -3.0);
        let gen = negative(NumberOptions::new(range)).unwrap();
        for value in gen.range(State::new(42), 200) {
            assert!(range.contains(value), "{} outside {:?}", value, range);
        }
    }

    #[test]
    fn test_negative_mirrors_positive() {
        let state = State::new(SCENARIO_SEED);
        let neg = negative(NumberOptions::new(Range::of(-9.0, -3.0))).unwrap();
        let pos = positive(NumberOptions::new(Range::of(3.0, 9.0))).unwrap();
        assert_eq!(neg.run(state), -pos.run(state));
    }

    #[test]
    fn test_negative_validation_rejections() {
        assert!(negative(NumberOptions::new(Range::of(-5.0, 1.0))).is_err());
        assert!(negative(NumberOptions::biased(Range::of(-10.0, -1.0), 5.0, 0.5)).is_err());
    }

    #[test]
    fn test_integer_ranged_scenario() {
        let range = Range::of(-57.0, 1400.0);
        let gen = integer(range).unwrap();
        let value = gen.run(State::new(SCENARIO_SEED));
        assert!(value >= -57 && value <= 1400);
        assert_eq!(value, gen.run(State::new(SCENARIO_SEED)));
    }

    #[test]
    fn test_integer_containment_across_signs() {
        for range in [
            Range::of(-57.0, 1400.0),
            Range::of(-10.0, -3.0),
            Range::of(3.0, 10.0),
            Range::of(0.0, 0.0),
        ] {
            let gen = integer(range).unwrap();
            for value in gen.range(State::new(42), 200) {
                assert!(
                    value as f64 >= range.min && value as f64 <= range.max,
                    "{} outside {:?}",
                    value,
                    range
                );
            }
        }
    }

    #[test]
    fn test_number_containment_and_fraction() {
        let range = Range::of(-57.0, 1400.0);
        let gen = number(range).unwrap();
        let values = gen.range(State::new(42), 200);
        for &value in &values {
            assert!(range.contains(value), "{} outside {:?}", value, range);
        }
        // At least one draw should carry a fractional part.
        assert!(values.iter().any(|v| v.fract() != 0.0));
    }

    #[test]
    fn test_number_rejects_inverted_range() {
        assert!(number(Range::of(3.0, -3.0)).is_err());
        assert!(integer(Range::of(3.0, -3.0)).is_err());
    }

    #[test]
    fn test_options_from_toml() {
        let options: NumberOptions = toml::from_str(
            r#"
            range = { min = 3.0, max = 9.0 }
            bias = { towards = { bias = 5.0, influence = 0.25 } }
            "#,
        )
        .unwrap();
        assert_eq!(options.range, Range::of(3.0, 9.0));
        assert_eq!(
            options.bias,
            Bias::Towards {
                bias: 5.0,
                influence: 0.25
            }
        );
        // Still validated like any hand-built options value.
        assert!(positive(options).is_ok());

        let unbiased: NumberOptions = toml::from_str(
            r#"
            range = { min = 0.0, max = 1.0 }
            "#,
        )
        .unwrap();
        assert_eq!(unbiased.bias, Bias::Unbiased);
    }
}
