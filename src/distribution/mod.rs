//! Index selection
//!
//! This module turns a seed into a discrete choice over `[0, n)`. Two
//! selection modes exist:
//!
//! - **Uniform**: every index equally likely (`floor(seed / 2^32 * n)`).
//! - **Weighted**: indices drawn from an explicit probability table via a
//!   cumulative-sum step function.
//!
//! Weighted selection is a drop-in replacement for uniform selection
//! wherever a `Gen<usize>` index is consumed — array-length selection,
//! union-arm selection, field-presence decisions — so skewed sampling never
//! changes the shape of the combinator algebra.
//!
//! # Validation
//!
//! Malformed tables are construction-time errors, never silently
//! corrected: the table length must equal the number of alternatives and
//! the weights must be non-negative and sum to 1 (within
//! [`weighted::WEIGHT_SUM_TOLERANCE`]).
//!
//! # Example
//!
//! ```
//! use seedling::distribution::{sized, uniform};
//! use seedling::State;
//!
//! let fair = uniform(4).unwrap();
//! assert!(fair.run(State::new(77)) < 4);
//!
//! let skewed = sized(3, vec![0.1, 0.2, 0.7]).unwrap();
//! assert!(skewed.run(State::new(77)) < 3);
//! ```

pub mod uniform;
pub mod weighted;

pub use uniform::uniform;
pub use weighted::{sized, Distribution};
