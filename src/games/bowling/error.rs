//! Error types for playing a bowling game.

use super::frame::FrameNumber;
use super::player::PlayerError;
use super::score::ScoreError;
use super::throw::ThrowError;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Failure reported by a throw source or roster collaborator.
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for InputError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("IO error: {}", err))
    }
}

/// Error raised while directing a game.
#[derive(Debug, Clone, Display, From)]
pub enum GameError {
    /// A throw could not be constructed.
    #[display("{}", _0)]
    #[from]
    Throw(ThrowError),

    /// A player could not be constructed.
    #[display("{}", _0)]
    #[from]
    Player(PlayerError),

    /// A collaborator failed to supply input.
    #[display("{}", _0)]
    #[from]
    Input(InputError),

    /// A score was requested before the game completed.
    #[display("{}", _0)]
    #[from]
    Score(ScoreError),

    /// The throw source returned more pins than were standing.
    #[display("{} pins knocked down but only {} standing", pins, standing)]
    PinsExceedStanding {
        /// Pins reported by the source.
        pins: u8,
        /// Pins that were standing.
        standing: u8,
    },

    /// A throw was recorded on a frame that needs no more throws.
    #[display("Frame {} already has all its throws", _0)]
    FrameClosed(FrameNumber),

    /// A game needs at least one player.
    #[display("A game needs at least one player")]
    NoPlayers,

    /// A frame or player invariant failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Throw(err) => Some(err),
            GameError::Player(err) => Some(err),
            GameError::Input(err) => Some(err),
            GameError::Score(err) => Some(err),
            _ => None,
        }
    }
}
