//! Frame phases and throw events.

use serde::{Deserialize, Serialize};

/// Where a frame is in its throw sequence.
///
/// `AwaitingThird` is only ever reached in the tenth frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum FramePhase {
    /// No throws yet; a full rack is standing.
    AwaitingFirst,
    /// One throw taken and the frame needs another.
    AwaitingSecond,
    /// Tenth frame earned a bonus throw with a strike or spare.
    AwaitingThird,
    /// No more throws in this frame.
    Done,
}

impl FramePhase {
    /// Whether the frame still accepts throws.
    pub fn is_open(self) -> bool {
        !matches!(self, FramePhase::Done)
    }
}

/// Notable result of a single throw, announced to the players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum ThrowEvent {
    /// The throw was called a foul.
    #[display("Foul!")]
    Foul,
    /// No pins went down.
    #[display("Gutterball!")]
    Gutter,
    /// A full rack went down in one throw.
    #[display("Strike!")]
    Strike,
    /// A rack was cleared with the second ball.
    #[display("Spare!")]
    Spare,
}
