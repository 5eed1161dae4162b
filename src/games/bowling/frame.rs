//! Frames: the ten scoring units of a player's game.

use super::throw::{PINS_PER_RACK, Throw};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of frames in a game.
pub const FRAMES_PER_GAME: u8 = 10;

/// Frame number in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameNumber(u8);

impl FrameNumber {
    /// The first frame.
    pub const FIRST: Self = Self(1);

    /// The tenth and final frame.
    pub const TENTH: Self = Self(FRAMES_PER_GAME);

    /// Creates a frame number, or `None` outside `1..=10`.
    #[instrument]
    pub fn new(number: u8) -> Option<Self> {
        (1..=FRAMES_PER_GAME).contains(&number).then_some(Self(number))
    }

    /// All ten frame numbers in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=FRAMES_PER_GAME).map(Self)
    }

    /// Returns the number as an integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into a player's frame list.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Whether this is the tenth frame.
    pub fn is_tenth(self) -> bool {
        self == Self::TENTH
    }

    /// Maximum throws this frame can hold: 3 in the tenth, 2 otherwise.
    pub fn max_throws(self) -> usize {
        if self.is_tenth() { 3 } else { 2 }
    }
}

impl std::fmt::Display for FrameNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One frame of one player: up to two throws, three in the tenth.
///
/// Frames only grow by appending. The throw cap is the caller's contract;
/// [`Frame::add_throw`] does not check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    number: FrameNumber,
    throws: Vec<Throw>,
}

impl Frame {
    /// Creates an empty frame.
    pub fn new(number: FrameNumber) -> Self {
        Self {
            number,
            throws: Vec::with_capacity(number.max_throws()),
        }
    }

    /// Creates a frame holding the given throws.
    pub fn with_throws(number: FrameNumber, throws: impl IntoIterator<Item = Throw>) -> Self {
        let mut frame = Self::new(number);
        for throw in throws {
            frame.add_throw(throw);
        }
        frame
    }

    /// Appends a throw.
    pub fn add_throw(&mut self, throw: Throw) {
        self.throws.push(throw);
    }

    /// Returns the frame number.
    pub fn number(&self) -> FrameNumber {
        self.number
    }

    /// Returns the throws in order.
    pub fn throws(&self) -> &[Throw] {
        &self.throws
    }

    /// Returns the throw at `index`, if taken.
    pub fn throw(&self, index: usize) -> Option<&Throw> {
        self.throws.get(index)
    }

    /// All ten pins on the first throw. A fouled ten still counts.
    pub fn is_strike(&self) -> bool {
        self.throws.first().is_some_and(Throw::is_full_rack)
    }

    /// Ten credited pins over the first two throws, without a strike.
    pub fn is_spare(&self) -> bool {
        match self.throws.as_slice() {
            [first, second, ..] => {
                !self.is_strike()
                    && first.effective_score() + second.effective_score() == PINS_PER_RACK
            }
            _ => false,
        }
    }

    /// Sum of the credited pins of every throw in the frame.
    pub fn pin_total(&self) -> u16 {
        self.throws
            .iter()
            .map(|t| u16::from(t.effective_score()))
            .sum()
    }
}
