//! The frame director: runs ten frames for every player.
//!
//! For each frame and each player the director drives a [`FrameState`],
//! asking the throw source for one pin count at a time, bounded by the pins
//! standing. Each decided frame is appended to its player.

use super::error::GameError;
use super::foul::{FoulChance, FoulSampler};
use super::frame::{Frame, FrameNumber};
use super::invariants::{FrameOrderInvariant, Invariant};
use super::player::Player;
use super::ports::{MessageSink, ThrowSource};
use super::state::FrameState;
use super::throw::Throw;
use tracing::{debug, info, instrument, warn};

/// Drives a game's frames against a throw source.
pub struct FrameDirector<'a> {
    source: &'a mut dyn ThrowSource,
    sink: &'a mut dyn MessageSink,
    sampler: &'a mut dyn FoulSampler,
    foul_chance: FoulChance,
}

impl<'a> FrameDirector<'a> {
    /// Creates a director over the given collaborators.
    pub fn new(
        source: &'a mut dyn ThrowSource,
        sink: &'a mut dyn MessageSink,
        sampler: &'a mut dyn FoulSampler,
        foul_chance: FoulChance,
    ) -> Self {
        Self {
            source,
            sink,
            sampler,
            foul_chance,
        }
    }

    /// Plays all ten frames, each player taking their turn in order per frame.
    #[instrument(skip_all, fields(players = players.len(), foul_chance = %self.foul_chance))]
    pub fn play(&mut self, players: &mut [Player]) -> Result<(), GameError> {
        info!("Starting game");
        for number in FrameNumber::all() {
            self.sink.display_message(&format!("--- Frame {} ---", number));
            for player in players.iter_mut() {
                self.sink
                    .display_message(&format!("{} is up", player.name()));
                let frame = self.play_frame(number)?;
                debug!(player = %player.name(), frame = %number, score = frame.pin_total(), "Frame decided");
                player.add_frame(frame);

                if cfg!(debug_assertions) {
                    check_frame_order(player)?;
                }
            }
        }
        info!("Game complete");
        Ok(())
    }

    /// Plays a single frame for the current player and returns it decided.
    #[instrument(skip(self))]
    pub fn play_frame(&mut self, number: FrameNumber) -> Result<Frame, GameError> {
        let mut state = FrameState::new(number);
        while !state.is_done() {
            let standing = state.pins_standing();
            let pins = self.source.request_pins_knocked_down(standing)?;
            debug!(standing, pins, phase = %state.phase(), "Pins reported");
            let throw = Throw::roll(pins, self.foul_chance, &mut *self.sampler)?;
            for event in state.record(throw)? {
                self.sink.display_message(&event.to_string());
            }
        }
        state.finish()
    }
}

/// Fails when the player's frames are out of order, naming the player.
fn check_frame_order(player: &Player) -> Result<(), GameError> {
    if FrameOrderInvariant::holds(player) {
        return Ok(());
    }
    warn!(player = %player.name(), "Frame order violated");
    Err(GameError::InvariantViolation(format!(
        "{} for player {}",
        FrameOrderInvariant::description(),
        player.name()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_order_violation_names_player() {
        let mut player = Player::new("Alice").unwrap();
        player.add_frame(Frame::new(FrameNumber::FIRST));
        player.add_frame(Frame::new(FrameNumber::TENTH));
        match check_frame_order(&player) {
            Err(GameError::InvariantViolation(message)) => {
                assert!(message.contains("Alice"), "{}", message);
                assert!(message.contains("in order"), "{}", message);
            }
            other => panic!("Expected invariant violation, got {:?}", other),
        }
    }

    #[test]
    fn test_frame_order_holds_for_sequential_frames() {
        let mut player = Player::new("Bob").unwrap();
        player.add_frame(Frame::new(FrameNumber::FIRST));
        assert!(check_frame_order(&player).is_ok());
    }
}
