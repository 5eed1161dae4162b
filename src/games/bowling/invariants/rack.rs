//! Rack invariant: pins knocked down between resets never exceed ten.

use super::super::{Frame, PINS_PER_RACK};
use super::Invariant;

/// Invariant: no rack yields more than ten pins.
///
/// A rack resets after a throw that clears it. In frames 1-9 that only
/// happens on a strike, which ends the frame; in the tenth a cleared rack
/// (strike, or spare on the second ball) is followed by a fresh one.
pub struct RackInvariant;

impl Invariant<Frame> for RackInvariant {
    fn holds(frame: &Frame) -> bool {
        let mut in_rack = 0u8;
        for throw in frame.throws() {
            in_rack += throw.pins_knocked_down();
            if in_rack > PINS_PER_RACK {
                return false;
            }
            if in_rack == PINS_PER_RACK {
                in_rack = 0;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Pins knocked down within one rack never exceed 10"
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
    fn test_open_frame_holds() {
        assert!(RackInvariant::holds(&frame(1, &[3, 7])));
    }

    #[test]
    fn test_overfull_rack_violates() {
        assert!(!RackInvariant::holds(&frame(1, &[8, 5])));
    }

    #[test]
    fn test_tenth_resets_after_strike() {
        assert!(RackInvariant::holds(&frame(10, &[10, 6, 4])));
        assert!(!RackInvariant::holds(&frame(10, &[10, 6, 5])));
    }

    #[test]
    fn test_tenth_resets_after_spare() {
        assert!(RackInvariant::holds(&frame(10, &[3, 7, 3])));
    }
}
