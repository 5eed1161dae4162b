//! Strictly Bowling library - type-safe ten-pin bowling scoring
//!
//! # Architecture
//!
//! - **Throw / Frame / Player**: the recorded game, immutable throws appended
//!   to frames appended to players
//! - **FrameState / FrameDirector**: the per-frame state machine and the game
//!   loop that feeds it pin counts from a [`ThrowSource`]
//! - **Score**: a pure pass over a completed frame sheet
//! - **Bowlers**: console, random and scripted throw sources
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{
//!     FixedFoulSampler, FoulChance, GameSetup, Player, RecordingSink, ScriptedBowler,
//! };
//!
//! # fn example() -> Result<(), strictly_bowling::GameError> {
//! let mut bowler = ScriptedBowler::new([10; 12]);
//! let mut sink = RecordingSink::new();
//! let finished = GameSetup::new(vec![Player::new("Player1")?])?
//!     .with_foul_chance(FoulChance::NEVER)
//!     .play(&mut bowler, &mut sink, &mut FixedFoulSampler::never())?;
//! assert_eq!(finished.total_for("Player1"), Some(300));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod bowlers;
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{BowlingConfig, ConfigError};

// Crate-level exports - Bowlers and sinks
pub use bowlers::{ConsoleBowler, ConsoleSink, RandomBowler, RecordingSink, ScriptedBowler};

// Crate-level exports - Game types (bowling)
pub use games::bowling::{
    Contract, FRAMES_PER_GAME, FixedFoulSampler, FoulChance, FoulSampler, Frame, FrameDirector,
    FrameNumber, FrameOpen, FramePhase, FrameState, GameError, GameFinished, GameSetup,
    InputError, MessageSink, PINS_PER_RACK, Player, PlayerError, RngFoulSampler, ScoreBoard,
    ScoreError, SeededFoulSampler, ThreadFoulSampler, Throw, ThrowContract, ThrowError,
    ThrowEvent, ThrowSource, WithinStanding, create_players, players_from_names, throw_symbol,
};

// Crate-level exports - Scoring and invariants
pub use games::bowling::{invariants, score};
