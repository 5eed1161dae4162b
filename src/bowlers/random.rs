//! Computer bowler that knocks down a random number of the standing pins.

use crate::games::bowling::{InputError, ThrowSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Bowler for auto-play: uniform pin counts in `0..=standing`.
#[derive(Debug, Clone)]
pub struct RandomBowler<R = StdRng> {
    names: Vec<String>,
    rng: R,
}

impl RandomBowler<StdRng> {
    /// Creates a bowler for `players` generated names, seeded from the OS.
    pub fn new(players: usize) -> Self {
        Self::with_rng(players, StdRng::from_os_rng())
    }

    /// Creates a reproducible bowler.
    pub fn seeded(players: usize, seed: u64) -> Self {
        Self::with_rng(players, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomBowler<R> {
    /// Creates a bowler drawing from `rng`.
    pub fn with_rng(players: usize, rng: R) -> Self {
        let names = (1..=players.max(1)).map(|i| format!("Bot {}", i)).collect();
        Self { names, rng }
    }
}

impl<R: Rng> ThrowSource for RandomBowler<R> {
    #[instrument(skip(self))]
    fn request_pins_knocked_down(&mut self, pins_standing: u8) -> Result<u8, InputError> {
        let pins = self.rng.random_range(0..=pins_standing);
        debug!(pins, "Bowler threw");
        Ok(pins)
    }

    fn request_player_count(&mut self) -> Result<usize, InputError> {
        Ok(self.names.len())
    }

    fn request_player_name(&mut self, ordinal: usize) -> Result<String, InputError> {
        self.names
            .get(ordinal.wrapping_sub(1))
            .cloned()
            .ok_or_else(|| InputError::new(format!("No bowler for player {}", ordinal)))
    }
}
