//! Players and their frame sheets.

use super::frame::Frame;
use super::score::{self, ScoreError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error constructing a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlayerError {
    /// The name was empty or whitespace.
    #[display("Player name must not be empty")]
    EmptyName,
}

impl std::error::Error for PlayerError {}

/// A bowler and the frames recorded for them so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    frames: Vec<Frame>,
}

impl Player {
    /// Creates a player with no frames.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>) -> Result<Self, PlayerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlayerError::EmptyName);
        }
        debug!(player = %name, "Player created");
        Ok(Self {
            name,
            frames: Vec::with_capacity(10),
        })
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the recorded frames in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Appends a fully decided frame.
    pub(crate) fn add_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Drops every recorded frame, keeping the name.
    pub(crate) fn clear_frames(&mut self) {
        self.frames.clear();
    }

    /// Total score. Fails unless all ten frames have been recorded.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn total_score(&self) -> Result<u16, ScoreError> {
        score::total_score(&self.frames)
    }

    /// Cumulative score after each frame. Fails unless all ten frames have been recorded.
    pub fn running_totals(&self) -> Result<Vec<u16>, ScoreError> {
        score::running_totals(&self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(Player::new("   "), Err(PlayerError::EmptyName));
        assert_eq!(Player::new(""), Err(PlayerError::EmptyName));
    }

    #[test]
    fn test_new_player_has_no_frames() {
        let player = Player::new("Alice").unwrap();
        assert_eq!(player.name(), "Alice");
        assert!(player.frames().is_empty());
    }

    #[test]
    fn test_incomplete_player_cannot_be_scored() {
        let player = Player::new("Bob").unwrap();
        assert_eq!(
            player.total_score(),
            Err(ScoreError::IncompleteGame { frames: 0 })
        );
    }
}
