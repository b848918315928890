//! Linear congruential seed advance
//!
//! The whole crate derives its pseudo-randomness from one pure function:
//! `seed' = (A * seed + C) mod 2^32`. Working in `u32` with wrapping
//! arithmetic gives the modulus for free, so `advance` is total and
//! constant-time with no error conditions.
//!
//! The default constants are the well-known Numerical Recipes parameters
//! (A = 1664525, C = 1013904223). Generators may be parameterized with a
//! different LCG, but the parameters always travel inside the state rather
//! than living in a global.

/// The seed modulus, 2^32. Wrapping `u32` arithmetic reduces modulo this
/// value implicitly.
pub const MODULUS: u64 = 1 << 32;

/// Default multiplier (Numerical Recipes).
pub const MULTIPLIER: u32 = 1_664_525;

/// Default increment (Numerical Recipes).
pub const INCREMENT: u32 = 1_013_904_223;

/// Linear congruential generator parameters
///
/// The modulus is fixed at 2^32 by the `u32` seed type; only the
/// multiplier and increment vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    /// Multiplier `A`
    pub multiplier: u32,
    /// Increment `C`
    pub increment: u32,
}

impl Lcg {
    /// Create an LCG with explicit parameters
    pub const fn new(multiplier: u32, increment: u32) -> Self {
        Lcg {
            multiplier,
            increment,
        }
    }

    /// Advance a seed one step: `(A * seed + C) mod 2^32`
    ///
    /// Deterministic: the same seed always advances to the same successor.
    #[inline(always)]
    pub fn advance(&self, seed: u32) -> u32 {
        self.multiplier
            .wrapping_mul(seed)
            .wrapping_add(self.increment)
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Lcg::new(MULTIPLIER, INCREMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_matches_formula() {
        let lcg = Lcg::default();

        for seed in [0u32, 1, 42, 1_357_954_837, u32::MAX] {
            let expected =
                ((u64::from(MULTIPLIER) * u64::from(seed) + u64::from(INCREMENT)) % (1u64 << 32)) as u32;
            assert_eq!(lcg.advance(seed), expected);
        }
    }

    #[test]
    fn test_advance_deterministic() {
        let lcg = Lcg::default();
        assert_eq!(lcg.advance(12345), lcg.advance(12345));
    }

    #[test]
    fn test_advance_zero_seed() {
        let lcg = Lcg::default();
        assert_eq!(lcg.advance(0), INCREMENT);
    }

    #[test]
    fn test_custom_parameters() {
        let lcg = Lcg::new(7, 3);
        assert_eq!(lcg.advance(5), 38);
    }

    #[test]
    fn test_advance_sequence_varies() {
        let lcg = Lcg::default();
        let mut seed = 42u32;
        let mut seen = std::collections::HashSet::new();

        for _ in 0..100 {
            seed = lcg.advance(seed);
            seen.insert(seed);
        }

        // A full-period LCG must not cycle within 100 steps.
        assert_eq!(seen.len(), 100);
    }
}
