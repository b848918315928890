//! Character and string generators
//!
//! Characters sample uniformly from a codepoint window; strings combine a
//! character generator with a sampled length. Windows that overlap the
//! surrogate block (or exceed the Unicode scalar range) are rejected at
//! construction, so sampling itself never fails.

use crate::combinator::vec_n;
use crate::error::ValidationError;
use crate::gen::Gen;
use crate::number::integer_unchecked;
use crate::scale::Range;
use crate::Result;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// Uniform character generator over the inclusive window `[min, max]`
///
/// # Example
///
/// ```
/// use seedling::text::character;
/// use seedling::State;
///
/// let lowercase = character('a', 'z').unwrap();
/// let ch = lowercase.run(State::new(42));
/// assert!(ch.is_ascii_lowercase());
/// ```
pub fn character(min: char, max: char) -> Result<Gen<char>> {
    let (lo, hi) = (min as u32, max as u32);
    if hi < lo {
        return Err(ValidationError::EmptyRange {
            min: f64::from(lo),
            max: f64::from(hi),
        }
        .into());
    }
    // `char` bounds are valid scalars; the window is bad only if it
    // straddles the surrogate block.
    if lo < SURROGATE_START && hi > SURROGATE_END {
        return Err(ValidationError::InvalidCharRange { min: lo, max: hi }.into());
    }
    Ok(character_unchecked(min, max))
}

/// [`character`] without the window check
pub fn character_unchecked(min: char, max: char) -> Gen<char> {
    let window = Range::of(f64::from(min as u32), f64::from(max as u32));
    integer_unchecked(window).map(|code| {
        // Windows accepted by `character` contain only Unicode scalars;
        // the fallback keeps the map total if a caller bypasses the check
        // with a straddling window.
        char::from_u32(code as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
    })
}

/// Printable ASCII characters, space through tilde
pub fn ascii() -> Gen<char> {
    character_unchecked(' ', '~')
}

/// String of characters from `chars`, with a uniformly sampled length
///
/// Validates `0 <= min <= max` on the length window.
pub fn string(chars: &Gen<char>, length: Range) -> Result<Gen<String>> {
    if length.max < length.min {
        return Err(ValidationError::EmptyRange {
            min: length.min,
            max: length.max,
        }
        .into());
    }
    if length.min < 0.0 {
        return Err(ValidationError::NegativeBound { min: length.min }.into());
    }
    let chars = chars.clone();
    Ok(integer_unchecked(length)
        .and_then(move |n| vec_n(&chars, n as usize).map(|cs| cs.into_iter().collect())))
}
