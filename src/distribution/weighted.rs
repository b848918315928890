//! Weighted index selection
//!
//! A [`Distribution`] is a validated probability table over `n`
//! alternatives. Selection converts the seed to a decimal in `[0, 1]` and
//! walks the cumulative-sum step function: the first cumulative boundary at
//! or above the decimal names the chosen index.
//!
//! # Floating-point tolerance
//!
//! Weights are `f64`, so "sums to exactly 1" is checked within
//! [`WEIGHT_SUM_TOLERANCE`]. The table itself is never renormalized; a sum
//! outside tolerance is a construction error.

use crate::error::ValidationError;
use crate::gen::Gen;
use crate::Result;

/// Permitted deviation of a weight table's sum from 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// A validated probability table with its cumulative step function
///
/// # Example
///
/// ```
/// use seedling::distribution::Distribution;
///
/// let dist = Distribution::new(&[0.1, 0.2, 0.7]).unwrap();
/// assert_eq!(dist.len(), 3);
/// assert_eq!(dist.index_of(0.05), 0);
/// assert_eq!(dist.index_of(0.25), 1);
/// assert_eq!(dist.index_of(0.99), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    cumulative: Vec<f64>,
}

impl Distribution {
    /// Build the cumulative table, rejecting negative weights and sums
    /// away from 1
    pub fn new(weights: &[f64]) -> Result<Self> {
        if weights.is_empty() {
            return Err(ValidationError::SizeTooSmall { size: 0 }.into());
        }

        for (index, &weight) in weights.iter().enumerate() {
            if weight < 0.0 {
                return Err(ValidationError::NegativeWeight { index, weight }.into());
            }
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::WeightSumMismatch { sum }.into());
        }

        let mut cumulative = Vec::with_capacity(weights.len());
        let mut running = 0.0;
        for &weight in weights {
            running += weight;
            cumulative.push(running);
        }
        log::debug!("built cumulative table over {} alternatives", cumulative.len());

        Ok(Distribution { cumulative })
    }

    /// Number of alternatives the table distributes over
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Index of the first cumulative boundary at or above `unit`
    ///
    /// `unit` is expected in `[0, 1]`; values above the final boundary
    /// (possible within the sum tolerance) select the last index.
    pub fn index_of(&self, unit: f64) -> usize {
        self.cumulative
            .partition_point(|&boundary| boundary < unit)
            .min(self.cumulative.len() - 1)
    }
}

/// Weighted index generator over `[0, size)`
///
/// The table length must equal `size`; mismatches and malformed tables are
/// construction-time errors with descriptive messages.
///
/// # Example
///
/// ```
/// use seedling::distribution::sized;
/// use seedling::State;
///
/// let arm = sized(3, vec![0.1, 0.2, 0.7]).unwrap();
/// assert!(arm.run(State::new(42)) < 3);
///
/// // Wrong table length is rejected up front:
/// assert!(sized(5, vec![0.1, 0.15, 0.2, 0.25, 0.2, 0.1]).is_err());
/// ```
pub fn sized(size: usize, weights: Vec<f64>) -> Result<Gen<usize>> {
    if size < 1 {
        return Err(ValidationError::SizeTooSmall { size }.into());
    }
    if weights.len() != size {
        return Err(ValidationError::WeightCountMismatch {
            weights: weights.len(),
            alternatives: size,
        }
        .into());
    }
    let distribution = Distribution::new(&weights)?;
    Ok(sized_unchecked(distribution))
}

/// Index generator from an already-validated table
pub fn sized_unchecked(distribution: Distribution) -> Gen<usize> {
    Gen::from_seed(move |seed| {
        let unit = f64::from(seed) / f64::from(u32::MAX);
        distribution.index_of(unit)
    })
}
