//! The generator algebra
//!
//! A [`Gen<A>`] is a lazy, side-effect-free description of "consume a
//! [`State`], produce a value of type `A` and a successor state". Nothing
//! runs until [`Gen::run`] or [`Gen::range`] is invoked, and composition
//! never mutates an existing generator — every combinator returns a new
//! one.
//!
//! # State threading
//!
//! Sequencing is what gives the algebra meaning: each chained generator
//! consumes the state left behind by its predecessor, so no seed is reused
//! across chained steps. Fresh randomness enters a chain only through
//! [`Gen::increment`] (or a primitive built on it, such as
//! [`Gen::from_seed`]); a generator that never advances the seed reads the
//! same value repeatedly — deterministic but non-varying.
//!
//! # Example
//!
//! ```
//! use seedling::{Gen, State};
//!
//! let doubled = Gen::of(8).map(|x| x * 2);
//! assert_eq!(doubled.run(State::new(999)), 16);
//!
//! // Ten state-threaded draws from one starting seed:
//! let seeds = Gen::from_seed(|seed| seed).range(State::new(42), 10);
//! assert_eq!(seeds.len(), 10);
//! ```

use crate::state::State;
use std::rc::Rc;

/// Number of values produced by [`Gen::samples`].
pub const DEFAULT_RANGE_SIZE: usize = 10;

/// A composable, stateful computation producing values of type `A`
///
/// Cloning a `Gen` is cheap (a reference-count bump) and shares the
/// underlying closure; the shared closure is immutable, so clones are
/// indistinguishable from the original.
pub struct Gen<A> {
    run_fn: Rc<dyn Fn(State) -> (A, State)>,
}

impl<A> Clone for Gen<A> {
    fn clone(&self) -> Self {
        Gen {
            run_fn: Rc::clone(&self.run_fn),
        }
    }
}

impl<A: 'static> Gen<A> {
    /// Wrap a raw `State -> (A, State)` function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(State) -> (A, State) + 'static,
    {
        Gen { run_fn: Rc::new(f) }
    }

    /// Lift a constant into a generator
    ///
    /// The state passes through untouched, so `of(x)` produces `x` for
    /// every seed.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Gen::new(move |state| (value.clone(), state))
    }

    /// Read the current seed, produce a value from it, and advance
    ///
    /// This is the primitive through which all numeric generators draw
    /// randomness: one seed read, one LCG step.
    pub fn from_seed<F>(f: F) -> Self
    where
        F: Fn(u32) -> A + 'static,
    {
        Gen::new(move |state: State| (f(state.seed), state.advance()))
    }

    /// Run once, returning the value and the successor state
    pub fn step(&self, state: State) -> (A, State) {
        (self.run_fn)(state)
    }

    /// Run once, discarding the successor state
    pub fn run(&self, state: State) -> A {
        self.step(state).0
    }

    /// Produce `size` values, threading each returned state into the next
    /// invocation
    ///
    /// The sequence is materialized and non-restartable: regenerating it
    /// requires supplying the original state again.
    pub fn range(&self, state: State, size: usize) -> Vec<A> {
        let mut out = Vec::with_capacity(size);
        let mut current = state;
        for _ in 0..size {
            let (value, next) = self.step(current);
            out.push(value);
            current = next;
        }
        out
    }

    /// [`Gen::range`] with the default size of 10
    pub fn samples(&self, state: State) -> Vec<A> {
        self.range(state, DEFAULT_RANGE_SIZE)
    }

    /// Transform the produced value, passing state through
    pub fn map<B, F>(&self, f: F) -> Gen<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let inner = self.clone();
        Gen::new(move |state| {
            let (value, next) = inner.step(state);
            (f(value), next)
        })
    }

    /// Monadic bind: run `self`, build a follow-up generator from its
    /// value, run that on the residual state
    pub fn and_then<B, F>(&self, f: F) -> Gen<B>
    where
        B: 'static,
        F: Fn(A) -> Gen<B> + 'static,
    {
        let inner = self.clone();
        Gen::new(move |state| {
            let (value, next) = inner.step(state);
            f(value).step(next)
        })
    }

    /// Applicative apply: `self` produces a function, `arg` produces its
    /// argument
    ///
    /// `self` is evaluated strictly before `arg` (left-to-right state
    /// threading). The ordering is part of the contract: swapping operand
    /// evaluation changes the deterministic output for the same seed.
    pub fn apply<B, C>(&self, arg: &Gen<B>) -> Gen<C>
    where
        B: 'static,
        C: 'static,
        A: Fn(B) -> C,
    {
        let func = self.clone();
        let arg = arg.clone();
        Gen::new(move |state| {
            let (f, after_func) = func.step(state);
            let (b, after_arg) = arg.step(after_func);
            (f(b), after_arg)
        })
    }

    /// Pair two generators, left before right
    pub fn zip<B: 'static>(&self, other: &Gen<B>) -> Gen<(A, B)> {
        let left = self.clone();
        let right = other.clone();
        Gen::new(move |state| {
            let (a, after_left) = left.step(state);
            let (b, after_right) = right.step(after_left);
            ((a, b), after_right)
        })
    }

    /// Pair two generators and merge the results
    pub fn zip_with<B, C, F>(&self, other: &Gen<B>, merge: F) -> Gen<C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        self.zip(other).map(move |(a, b)| merge(a, b))
    }

    /// Resample until the predicate accepts a value
    ///
    /// Each rejected draw's value is discarded and the generator re-runs on
    /// the residual state. **Never terminates if the predicate is never
    /// satisfiable** (or if `self` never advances the seed): supplying a
    /// satisfiable predicate is the caller's responsibility.
    pub fn filter<P>(&self, predicate: P) -> Gen<A>
    where
        P: Fn(&A) -> bool + 'static,
    {
        let inner = self.clone();
        Gen::new(move |state| {
            let mut current = state;
            loop {
                let (value, next) = inner.step(current);
                if predicate(&value) {
                    return (value, next);
                }
                current = next;
            }
        })
    }

    /// Transform the successor state alone, value untouched
    pub fn modify<F>(&self, f: F) -> Gen<A>
    where
        F: Fn(State) -> State + 'static,
    {
        let inner = self.clone();
        Gen::new(move |state| {
            let (value, next) = inner.step(state);
            (value, f(next))
        })
    }

    /// Advance the seed one LCG step after running `self`
    ///
    /// This is [`Gen::modify`] specialized to the LCG advance — the
    /// mechanism by which fresh randomness enters a chain.
    pub fn increment(&self) -> Gen<A> {
        self.modify(State::advance)
    }

    /// Record-building sugar: sample `field` and attach it to the value
    /// produced so far
    ///
    /// Threads state exactly as [`Gen::and_then`] would; purely ergonomic.
    ///
    /// # Example
    ///
    /// ```
    /// use seedling::{number, Gen, Range, State};
    ///
    /// #[derive(Clone, Default)]
    /// struct Point {
    ///     x: f64,
    ///     y: f64,
    /// }
    ///
    /// let coordinate = number(Range::new(-10.0, 10.0).unwrap()).unwrap();
    /// let point = Gen::of(Point::default())
    ///     .with(&coordinate, |p, x| p.x = x)
    ///     .with(&coordinate, |p, y| p.y = y);
    ///
    /// let sampled = point.run(State::new(7));
    /// assert!(sampled.x >= -10.0 && sampled.x <= 10.0);
    /// assert!(sampled.y >= -10.0 && sampled.y <= 10.0);
    /// ```
    pub fn with<B, F>(&self, field: &Gen<B>, assign: F) -> Gen<A>
    where
        B: 'static,
        F: Fn(&mut A, B) + 'static,
    {
        let inner = self.clone();
        let field = field.clone();
        Gen::new(move |state| {
            let (mut value, after_value) = inner.step(state);
            let (extra, after_field) = field.step(after_value);
            assign(&mut value, extra);
            (value, after_field)
        })
    }
}
