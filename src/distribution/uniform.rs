//! Uniform index selection
//!
//! Scales the seed into `[0, n)` and floors. The seed never reaches the
//! modulus, so the ratio `seed / 2^32` is strictly below 1 and the floored
//! index strictly below `n`.

use crate::error::ValidationError;
use crate::gen::Gen;
use crate::lcg::MODULUS;
use crate::Result;

/// Uniform index generator over `[0, size)`
///
/// Rejects `size < 1` at construction.
///
/// # Example
///
/// ```
/// use seedling::distribution::uniform;
/// use seedling::State;
///
/// let index = uniform(10).unwrap();
/// for value in index.range(State::new(42), 100) {
///     assert!(value < 10);
/// }
/// ```
pub fn uniform(size: usize) -> Result<Gen<usize>> {
    if size < 1 {
        return Err(ValidationError::SizeTooSmall { size }.into());
    }
    Ok(uniform_unchecked(size))
}

/// [`uniform`] without the size check
///
/// Caller guarantees `size >= 1`.
pub fn uniform_unchecked(size: usize) -> Gen<usize> {
    Gen::from_seed(move |seed| {
        let index = (f64::from(seed) / MODULUS as f64 * size as f64).floor() as usize;
        // f64 rounding cannot push the ratio to 1, but very large sizes
        // lose integer precision in the product; cap to stay in-domain.
        index.min(size - 1)
    })
}
