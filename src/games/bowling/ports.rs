//! Collaborator traits: where pin counts come from and where messages go.

use super::error::InputError;

/// Supplies pin counts and roster details to a game.
///
/// Implementations own input validation: every value they return must
/// already be in range (re-prompting as needed).
pub trait ThrowSource {
    /// Pins knocked down by the next throw, in `0..=pins_standing`.
    fn request_pins_knocked_down(&mut self, pins_standing: u8) -> Result<u8, InputError>;

    /// Number of players, at least 1.
    fn request_player_count(&mut self) -> Result<usize, InputError>;

    /// Non-empty name for the player at `ordinal` (1-based).
    fn request_player_name(&mut self, ordinal: usize) -> Result<String, InputError>;
}

/// Receives announcements: throw events, frame headers, turn banners and the
/// final scoreboard.
pub trait MessageSink {
    /// Displays a message. Fire-and-forget.
    fn display_message(&mut self, text: &str);
}
