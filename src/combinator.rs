//! Structural combinators
//!
//! Shape-building combinators over the core algebra: arrays, unions,
//! optional fields, merged records, lazy forward references, and string
//! splicing. None of these introduce new state, failure modes, or
//! algorithmic content — each is a straightforward composition of
//! [`Gen::and_then`], [`Gen::map`], and the numeric/index generators.
//!
//! # Example
//!
//! ```
//! use seedling::combinator::{array, union};
//! use seedling::{decimal, Gen, Range, State};
//!
//! let lengths = Range::new(2.0, 5.0).unwrap();
//! let vec = array(&decimal(), lengths).unwrap();
//! let values = vec.run(State::new(42));
//! assert!(values.len() >= 2 && values.len() <= 5);
//!
//! let arm = union(vec![Gen::of(1), Gen::of(2), Gen::of(3)]).unwrap();
//! assert!((1..=3).contains(&arm.run(State::new(42))));
//! ```

use crate::distribution::{sized, uniform};
use crate::error::ValidationError;
use crate::gen::Gen;
use crate::number::{decimal, integer_unchecked};
use crate::scale::Range;
use crate::Result;

/// Fixed-length vector: run `item` `count` times, threading state
pub fn vec_n<A: 'static>(item: &Gen<A>, count: usize) -> Gen<Vec<A>> {
    let item = item.clone();
    Gen::new(move |state| {
        let mut out = Vec::with_capacity(count);
        let mut current = state;
        for _ in 0..count {
            let (value, next) = item.step(current);
            out.push(value);
            current = next;
        }
        (out, current)
    })
}

/// Vector with a uniformly sampled length from `length`
///
/// Validates `0 <= min <= max`.
pub fn array<A: 'static>(item: &Gen<A>, length: Range) -> Result<Gen<Vec<A>>> {
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
    let item = item.clone();
    Ok(integer_unchecked(length).and_then(move |n| vec_n(&item, n as usize)))
}

/// Vector with a weighted length: index `i` of the table is length `i`
pub fn array_sized<A: 'static>(item: &Gen<A>, weights: Vec<f64>) -> Result<Gen<Vec<A>>> {
    let length = sized(weights.len(), weights)?;
    let item = item.clone();
    Ok(length.and_then(move |n| vec_n(&item, n)))
}

/// Uniformly select one arm and run it
pub fn union<A: 'static>(arms: Vec<Gen<A>>) -> Result<Gen<A>> {
    let selector = uniform(arms.len())?;
    Ok(selector.and_then(move |index| arms[index].clone()))
}

/// Select one arm from a weighted table and run it
pub fn union_sized<A: 'static>(arms: Vec<Gen<A>>, weights: Vec<f64>) -> Result<Gen<A>> {
    let selector = sized(arms.len(), weights)?;
    Ok(selector.and_then(move |index| arms[index].clone()))
}

/// Uniformly select one constant
pub fn one_of<A: Clone + 'static>(choices: Vec<A>) -> Result<Gen<A>> {
    let selector = uniform(choices.len())?;
    Ok(selector.map(move |index| choices[index].clone()))
}

/// Produce `Some` with probability `presence`, `None` otherwise
///
/// `presence` must lie in `[0, 1]`; 1 always produces `Some`.
pub fn optional<A: 'static>(item: &Gen<A>, presence: f64) -> Result<Gen<Option<A>>> {
    if !(0.0..=1.0).contains(&presence) {
        return Err(ValidationError::PresenceOutOfRange { presence }.into());
    }
    let item = item.clone();
    Ok(decimal().and_then(move |unit| {
        if unit <= presence {
            item.map(Some)
        } else {
            Gen::new(|state| (None, state))
        }
    }))
}

/// Run two generators left-to-right and merge their values
pub fn intersect<A, B, C, F>(left: &Gen<A>, right: &Gen<B>, merge: F) -> Gen<C>
where
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + 'static,
{
    left.zip_with(right, merge)
}

/// Defer dereferencing a generator until first execution
///
/// The thunk runs at execution time, not construction time, so a
/// generator may reference one defined later in the same scope (including
/// mutually recursive definitions) without an initialization-order
/// failure.
pub fn lazy<A, F>(thunk: F) -> Gen<A>
where
    A: 'static,
    F: Fn() -> Gen<A> + 'static,
{
    Gen::new(move |state| thunk().step(state))
}

/// Concatenate string parts, threading state left to right
pub fn spliced(parts: Vec<Gen<String>>) -> Gen<String> {
    Gen::new(move |state| {
        let mut out = String::new();
        let mut current = state;
        for part in &parts {
            let (piece, next) = part.step(current);
            out.push_str(&piece);
            current = next;
        }
        (out, current)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::integer;
    use crate::state::State;

    #[test]
    fn test_vec_n_threads_state() {
        let item = Gen::from_seed(|seed| seed);
        let values = vec_n(&item, 4).run(State::new(42));
        assert_eq!(values.len(), 4);
        // State threads through the items: consecutive draws differ.
        assert_ne!(values[0], values[1]);
        // And the whole vector reproduces from the same state.
        assert_eq!(values, vec_n(&item, 4).run(State::new(42)));
    }

    #[test]
    fn test_vec_n_zero_length() {
        let item = Gen::of(1u8);
        assert!(vec_n(&item, 0).run(State::new(1)).is_empty());
    }

    #[test]
    fn test_array_length_bounds() {
        let item = decimal();
        let gen = array(&item, Range::of(2.0, 5.0)).unwrap();
        for values in gen.range(State::new(42), 50) {
            assert!(values.len() >= 2 && values.len() <= 5);
        }
    }

    #[test]
    fn test_array_rejects_bad_lengths() {
        let item = decimal();
        assert!(array(&item, Range::of(5.0, 2.0)).is_err());
        assert!(array(&item, Range::of(-1.0, 2.0)).is_err());
    }

    #[test]
    fn test_array_sized_lengths_follow_table() {
        let item = Gen::of(0u8);
        // Lengths 0..4, all mass on length 3.
        let gen = array_sized(&item, vec![0.0, 0.0, 0.0, 1.0]).unwrap();
        for values in gen.range(State::new(11), 20) {
            assert_eq!(values.len(), 3);
        }
    }

    #[test]
    fn test_union_selects_among_arms() {
        let arms = vec![Gen::of(10), Gen::of(20), Gen::of(30)];
        let gen = union(arms).unwrap();
        let mut seen = std::collections::HashSet::new();
        for value in gen.range(State::new(42), 200) {
            assert!([10, 20, 30].contains(&value));
            seen.insert(value);
        }
        // Uniform selection over 200 draws reaches every arm.
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_union_rejects_empty() {
        assert!(union(Vec::<Gen<i32>>::new()).is_err());
    }

    #[test]
    fn test_union_sized_skews_arms() {
        let arms = vec![Gen::of(0usize), Gen::of(1), Gen::of(2)];
        let gen = union_sized(arms, vec![0.1, 0.2, 0.7]).unwrap();
        let mut counts = [0u32; 3];
        for value in gen.range(State::new(42), 100) {
            counts[value] += 1;
        }
        assert!(counts[2] > counts[0] && counts[2] > counts[1]);
    }

    #[test]
    fn test_union_sized_rejects_mismatched_table() {
        let arms = vec![Gen::of(0), Gen::of(1)];
        assert!(union_sized(arms, vec![0.5, 0.3, 0.2]).is_err());
    }

    #[test]
    fn test_one_of_constants() {
        let gen = one_of(vec!["red", "green", "blue"]).unwrap();
        for value in gen.range(State::new(7), 60) {
            assert!(["red", "green", "blue"].contains(&value));
        }
        assert!(one_of(Vec::<u8>::new()).is_err());
    }

    #[test]
    fn test_optional_presence_extremes() {
        let item = Gen::of(5);
        let always = optional(&item, 1.0).unwrap();
        for value in always.range(State::new(42), 30) {
            assert_eq!(value, Some(5));
        }

        assert!(optional(&item, 1.5).is_err());
        assert!(optional(&item, -0.1).is_err());
    }

    #[test]
    fn test_optional_mixed_presence() {
        let item = Gen::of(5);
        let sometimes = optional(&item, 0.5).unwrap();
        let values = sometimes.range(State::new(42), 100);
        let present = values.iter().filter(|v| v.is_some()).count();
        assert!(present > 20 && present < 80, "present = {}", present);
    }

    #[test]
    fn test_intersect_merges_left_to_right() {
        let state = State::new(42);
        let left = Gen::from_seed(|seed| seed);
        let right = Gen::from_seed(|seed| seed);
        let merged = intersect(&left, &right, |a, b| (a, b));
        let (a, b) = merged.run(state);
        assert_eq!(a, 42);
        assert_eq!(b, state.advance().seed);
    }

    // Forward reference: `lazy` lets this generator call a constructor
    // defined below it, recursively, without evaluating at build time.
    fn nesting(depth: u32) -> Gen<u32> {
        if depth == 0 {
            Gen::of(0)
        } else {
            lazy(move || nesting(depth - 1)).map(|inner| inner + 1)
        }
    }

    #[test]
    fn test_lazy_defers_recursion() {
        assert_eq!(nesting(4).run(State::new(1)), 4);
    }

    #[test]
    fn test_lazy_equivalent_to_direct() {
        let state = State::new(42);
        let direct = integer(Range::of(0.0, 100.0)).unwrap();
        let deferred = lazy(|| integer_unchecked(Range::of(0.0, 100.0)));
        assert_eq!(direct.run(state), deferred.run(state));
    }

    #[test]
    fn test_spliced_concatenates_in_order() {
        let state = State::new(42);
        let seed_text = Gen::from_seed(|seed| seed.to_string());
        let gen = spliced(vec![
            Gen::of("id-".to_string()),
            seed_text.clone(),
            Gen::of("!".to_string()),
        ]);
        let expected = format!("id-{}!", state.seed);
        assert_eq!(gen.run(state), expected);
        // The spliced part consumed a seed step.
        let (_, next) = gen.step(state);
        assert_eq!(next, state.advance());
    }
}
