//! Throw-count invariants: how many throws a frame may and must hold.

use super::super::{Frame, PINS_PER_RACK};
use super::Invariant;

/// Invariant: a frame never holds more throws than its number allows.
///
/// Two throws in frames 1-9, three in the tenth.
pub struct ThrowCapInvariant;

impl Invariant<Frame> for ThrowCapInvariant {
    fn holds(frame: &Frame) -> bool {
        frame.throws().len() <= frame.number().max_throws()
    }

    fn description() -> &'static str {
        "Frame holds at most 2 throws (3 in the tenth)"
    }
}

/// Invariant: a decided frame holds exactly the throws its rules require.
///
/// Frames 1-9 end after a strike or after two throws. The tenth takes a
/// third throw iff its first two produced a strike or cleared the rack.
pub struct CompleteFrameInvariant;

impl CompleteFrameInvariant {
    /// Number of throws a decided frame must hold, or `None` if the frame
    /// does not yet have enough throws to tell.
    pub fn required_throws(frame: &Frame) -> Option<usize> {
        let throws = frame.throws();
        let first = throws.first()?;
        if !frame.number().is_tenth() {
            return Some(if first.is_full_rack() { 1 } else { 2 });
        }
        let second = throws.get(1)?;
        let earned_bonus = first.is_full_rack()
            || first.pins_knocked_down() + second.pins_knocked_down() == PINS_PER_RACK;
        Some(if earned_bonus { 3 } else { 2 })
    }
}

impl Invariant<Frame> for CompleteFrameInvariant {
    fn holds(frame: &Frame) -> bool {
        Self::required_throws(frame) == Some(frame.throws().len())
    }

    fn description() -> &'static str {
        "Decided frame holds exactly the throws its rules require"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::bowling::{FrameNumber, Throw};

    fn frame(number: u8, pins: &[u8]) -> Frame {
        Frame::with_throws(
            FrameNumber::new(number).unwrap(),
            pins.iter().map(|&p| Throw::new(p, false).unwrap()),
        )
    }

    #[test]
    fn test_cap_allows_third_throw_only_in_tenth() {
        assert!(ThrowCapInvariant::holds(&frame(10, &[10, 10, 10])));
        assert!(!ThrowCapInvariant::holds(&frame(9, &[1, 2, 3])));
    }

    #[test]
    fn test_strike_frame_is_complete_with_one_throw() {
        assert!(CompleteFrameInvariant::holds(&frame(1, &[10])));
        assert!(!CompleteFrameInvariant::holds(&frame(1, &[10, 0])));
    }

    #[test]
    fn test_open_frame_needs_two_throws() {
        assert!(!CompleteFrameInvariant::holds(&frame(5, &[4])));
        assert!(CompleteFrameInvariant::holds(&frame(5, &[4, 5])));
    }

    #[test]
    fn test_tenth_requires_third_after_spare() {
        assert_eq!(
            CompleteFrameInvariant::required_throws(&frame(10, &[4, 6])),
            Some(3)
        );
        assert_eq!(
            CompleteFrameInvariant::required_throws(&frame(10, &[4, 5])),
            Some(2)
        );
    }

    #[test]
    fn test_tenth_with_one_throw_undecided() {
        assert_eq!(CompleteFrameInvariant::required_throws(&frame(10, &[10])), None);
    }
}
