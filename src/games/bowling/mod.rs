//! Ten-pin bowling: throws, frames, the frame director and scoring.

mod contracts;
mod director;
mod error;
mod foul;
mod frame;
pub mod invariants;
mod phases;
mod player;
mod ports;
mod roster;
pub mod score;
mod scoreboard;
mod state;
mod throw;
mod typestate;

pub use contracts::{Contract, FrameOpen, ThrowContract, WithinStanding};
pub use director::FrameDirector;
pub use error::{GameError, InputError};
pub use foul::{
    FixedFoulSampler, FoulChance, FoulSampler, RngFoulSampler, SeededFoulSampler,
    ThreadFoulSampler,
};
pub use frame::{FRAMES_PER_GAME, Frame, FrameNumber};
pub use phases::{FramePhase, ThrowEvent};
pub use player::{Player, PlayerError};
pub use ports::{MessageSink, ThrowSource};
pub use roster::{create_players, players_from_names};
pub use score::ScoreError;
pub use scoreboard::{ScoreBoard, throw_symbol};
pub use state::FrameState;
pub use throw::{PINS_PER_RACK, Throw, ThrowError};
pub use typestate::{GameFinished, GameSetup};
