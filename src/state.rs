//! Generator state
//!
//! A [`State`] is the seed paired with the LCG parameters that advance it.
//! It is a small `Copy` value owned exclusively by the in-flight
//! computation: every combinator consumes a state and returns a fresh one,
//! never mutating shared storage. There is no global seed anywhere in the
//! crate.

use crate::lcg::Lcg;
use rand::Rng;

/// Seed plus the LCG that advances it
///
/// Construct with [`State::new`] for reproducible runs or
/// [`State::from_entropy`] for a random starting point.
///
/// # Example
///
/// ```
/// use seedling::State;
///
/// let state = State::new(42);
/// let next = state.advance();
/// assert_ne!(state.seed, next.seed);
/// assert_eq!(state.advance().seed, next.seed); // deterministic
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    /// Current seed, always in `[0, 2^32)` by construction
    pub seed: u32,
    /// LCG parameters threaded alongside the seed
    pub lcg: Lcg,
}

impl State {
    /// Create a state with the default LCG parameters
    pub fn new(seed: u32) -> Self {
        State {
            seed,
            lcg: Lcg::default(),
        }
    }

    /// Create a state with explicit LCG parameters
    pub fn with_lcg(seed: u32, lcg: Lcg) -> Self {
        State { seed, lcg }
    }

    /// Create a state seeded from OS entropy
    ///
    /// Useful when reproducibility is not needed. The resulting state is
    /// still fully deterministic from its (unknown) starting seed.
    pub fn from_entropy() -> Self {
        State::new(rand::thread_rng().gen())
    }

    /// Advance the seed one LCG step, returning the successor state
    #[inline(always)]
    pub fn advance(self) -> State {
        State {
            seed: self.lcg.advance(self.seed),
            lcg: self.lcg,
        }
    }
}
