//! Foul draws for individual throws.
//!
//! A foul is an independent per-throw decision that zeroes the throw's score.
//! The draw is isolated behind [`FoulSampler`] so games can be replayed
//! deterministically with a seeded or fixed sampler.

use super::throw::ThrowError;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Percent chance (0-100) that any single throw is a foul.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FoulChance(u8);

impl FoulChance {
    /// Fouls never happen.
    pub const NEVER: Self = Self(0);

    /// Every throw is a foul.
    pub const ALWAYS: Self = Self(100);

    /// Creates a foul chance from a percentage.
    #[instrument]
    pub fn new(percent: u8) -> Result<Self, ThrowError> {
        if percent > 100 {
            Err(ThrowError::FoulChanceOutOfRange(percent))
        } else {
            Ok(Self(percent))
        }
    }

    /// Returns the chance as a percentage.
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl Default for FoulChance {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for FoulChance {
    type Error = ThrowError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<FoulChance> for u8 {
    fn from(chance: FoulChance) -> Self {
        chance.0
    }
}

impl std::fmt::Display for FoulChance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Source of foul decisions.
pub trait FoulSampler {
    /// Decides whether the next throw is a foul.
    fn is_foul(&mut self, chance: FoulChance) -> bool;
}

/// Foul sampler backed by any random number generator.
///
/// Draws a number in `1..=100` and calls a foul when it is at or below the
/// chance, so a chance of 0 never fouls and 100 always does.
#[derive(Debug, Clone)]
pub struct RngFoulSampler<R> {
    rng: R,
}

impl<R: Rng> RngFoulSampler<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FoulSampler for RngFoulSampler<R> {
    fn is_foul(&mut self, chance: FoulChance) -> bool {
        let draw: u8 = self.rng.random_range(1..=100);
        let foul = draw <= chance.percent();
        trace!(draw, chance = chance.percent(), foul, "Foul draw");
        foul
    }
}

/// Sampler drawing from the thread-local generator. Not reproducible.
pub type ThreadFoulSampler = RngFoulSampler<ThreadRng>;

/// Sampler drawing from a seeded generator. Reproducible per seed.
pub type SeededFoulSampler = RngFoulSampler<StdRng>;

impl ThreadFoulSampler {
    /// Creates a sampler on the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl SeededFoulSampler {
    /// Creates a sampler seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

/// Sampler that always returns the same decision, ignoring the chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedFoulSampler {
    foul: bool,
}

impl FixedFoulSampler {
    /// Never fouls.
    pub fn never() -> Self {
        Self { foul: false }
    }

    /// Always fouls.
    pub fn always() -> Self {
        Self { foul: true }
    }
}

impl FoulSampler for FixedFoulSampler {
    fn is_foul(&mut self, _chance: FoulChance) -> bool {
        self.foul
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chance_is_five_percent() {
        assert_eq!(FoulChance::default().percent(), 5);
    }

    #[test]
    fn test_chance_above_hundred_rejected() {
        assert_eq!(
            FoulChance::new(101),
            Err(ThrowError::FoulChanceOutOfRange(101))
        );
        assert!(FoulChance::new(100).is_ok());
    }

    #[test]
    fn test_zero_chance_never_fouls() {
        let mut sampler = SeededFoulSampler::seeded(7);
        assert!((0..1_000).all(|_| !sampler.is_foul(FoulChance::NEVER)));
    }

    #[test]
    fn test_full_chance_always_fouls() {
        let mut sampler = SeededFoulSampler::seeded(7);
        assert!((0..1_000).all(|_| sampler.is_foul(FoulChance::ALWAYS)));
    }

    #[test]
    fn test_seeded_sampler_reproducible() {
        let chance = FoulChance::new(50).unwrap();
        let mut a = SeededFoulSampler::seeded(42);
        let mut b = SeededFoulSampler::seeded(42);
        let left: Vec<bool> = (0..64).map(|_| a.is_foul(chance)).collect();
        let right: Vec<bool> = (0..64).map(|_| b.is_foul(chance)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_fixed_sampler_ignores_chance() {
        assert!(FixedFoulSampler::always().is_foul(FoulChance::NEVER));
        assert!(!FixedFoulSampler::never().is_foul(FoulChance::ALWAYS));
    }
}
