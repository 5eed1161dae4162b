//! Bowler replaying a fixed sequence of pin counts.

use crate::games::bowling::{InputError, ThrowSource};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Throw source that returns pin counts from a script, then zeros.
///
/// Values are returned as given, even when they exceed the pins standing,
/// so the director's bound checks can be exercised.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBowler {
    pins: VecDeque<u8>,
    names: Vec<String>,
    requested: Vec<u8>,
}

impl ScriptedBowler {
    /// Creates a bowler for a single player named "Player1".
    pub fn new(pins: impl IntoIterator<Item = u8>) -> Self {
        Self::for_players(pins, ["Player1"])
    }

    /// Creates a bowler with the given roster.
    pub fn for_players<S: Into<String>>(
        pins: impl IntoIterator<Item = u8>,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            pins: pins.into_iter().collect(),
            names: names.into_iter().map(Into::into).collect(),
            requested: Vec::new(),
        }
    }

    /// Pins-standing values the director asked with, in order.
    pub fn requested(&self) -> &[u8] {
        &self.requested
    }

    /// Scripted pin counts not yet consumed.
    pub fn remaining(&self) -> usize {
        self.pins.len()
    }
}

impl ThrowSource for ScriptedBowler {
    #[instrument(skip(self))]
    fn request_pins_knocked_down(&mut self, pins_standing: u8) -> Result<u8, InputError> {
        self.requested.push(pins_standing);
        let pins = self.pins.pop_front().unwrap_or(0);
        debug!(pins, "Scripted throw");
        Ok(pins)
    }

    fn request_player_count(&mut self) -> Result<usize, InputError> {
        Ok(self.names.len())
    }

    fn request_player_name(&mut self, ordinal: usize) -> Result<String, InputError> {
        self.names
            .get(ordinal.wrapping_sub(1))
            .cloned()
            .ok_or_else(|| InputError::new(format!("No scripted name for player {}", ordinal)))
    }
}
