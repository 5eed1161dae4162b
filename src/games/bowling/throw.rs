//! A single roll of the ball.

use super::foul::{FoulChance, FoulSampler, ThreadFoulSampler};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of pins in a full rack.
pub const PINS_PER_RACK: u8 = 10;

/// Error constructing a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ThrowError {
    /// Pin count outside 0-10.
    #[display("Pins knocked down must be between 0 and 10, got {}", _0)]
    PinsOutOfRange(u8),

    /// Foul chance outside 0-100.
    #[display("Foul chance must be between 0 and 100 percent, got {}", _0)]
    FoulChanceOutOfRange(u8),
}

impl std::error::Error for ThrowError {}

/// One throw: pins knocked down and whether it was a foul.
///
/// Immutable once created. A fouled throw still knocked its pins down
/// physically (they count toward strike detection) but scores zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Throw {
    pins_knocked_down: u8,
    is_foul: bool,
}

impl Throw {
    /// Creates a throw with a known foul status.
    #[instrument]
    pub fn new(pins_knocked_down: u8, is_foul: bool) -> Result<Self, ThrowError> {
        if pins_knocked_down > PINS_PER_RACK {
            return Err(ThrowError::PinsOutOfRange(pins_knocked_down));
        }
        Ok(Self {
            pins_knocked_down,
            is_foul,
        })
    }

    /// Creates a throw, drawing its foul status from `sampler`.
    ///
    /// The pin count is validated before the draw, so an invalid count never
    /// consumes randomness.
    #[instrument(skip(sampler))]
    pub fn roll(
        pins_knocked_down: u8,
        chance: FoulChance,
        sampler: &mut dyn FoulSampler,
    ) -> Result<Self, ThrowError> {
        if pins_knocked_down > PINS_PER_RACK {
            return Err(ThrowError::PinsOutOfRange(pins_knocked_down));
        }
        let is_foul = sampler.is_foul(chance);
        debug!(pins_knocked_down, is_foul, "Throw rolled");
        Ok(Self {
            pins_knocked_down,
            is_foul,
        })
    }

    /// Creates a throw with the foul status drawn from the thread-local generator.
    pub fn sampled(pins_knocked_down: u8, chance: FoulChance) -> Result<Self, ThrowError> {
        Self::roll(pins_knocked_down, chance, &mut ThreadFoulSampler::thread())
    }

    /// Pins physically knocked down.
    pub fn pins_knocked_down(&self) -> u8 {
        self.pins_knocked_down
    }

    /// Whether the throw was a foul.
    pub fn is_foul(&self) -> bool {
        self.is_foul
    }

    /// Pins credited for scoring: zero on a foul.
    pub fn effective_score(&self) -> u8 {
        if self.is_foul {
            0
        } else {
            self.pins_knocked_down
        }
    }

    /// Whether every pin went down.
    pub fn is_full_rack(&self) -> bool {
        self.pins_knocked_down == PINS_PER_RACK
    }
}
