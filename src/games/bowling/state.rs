//! Per-frame throw state machine.
//!
//! A [`FrameState`] walks one frame through
//! `AwaitingFirst -> AwaitingSecond -> AwaitingThird -> Done`, skipping states
//! as the rules dictate. It knows how many pins are standing before each
//! throw and which events each throw announces. The director only asks it
//! questions and feeds it throws.

use super::contracts::{Contract, ThrowContract};
use super::error::GameError;
use super::frame::{Frame, FrameNumber};
use super::invariants::{self, InvariantViolation};
use super::phases::{FramePhase, ThrowEvent};
use super::throw::{PINS_PER_RACK, Throw};
use tracing::{debug, instrument, warn};

/// A frame being played, with its current phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameState {
    pub(super) frame: Frame,
    pub(super) phase: FramePhase,
}

impl FrameState {
    /// Starts a frame with a full rack.
    pub fn new(number: FrameNumber) -> Self {
        Self {
            frame: Frame::new(number),
            phase: FramePhase::AwaitingFirst,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Returns the frame as played so far.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Whether the frame needs no more throws.
    pub fn is_done(&self) -> bool {
        !self.phase.is_open()
    }

    /// Pins standing for the next throw.
    ///
    /// Ten on a fresh rack. After a throw that left pins up, the remainder.
    /// In the tenth, the rack resets after a strike on the first ball, and for
    /// the third ball after a strike on the second ball; otherwise the third
    /// ball faces what the second ball left.
    pub fn pins_standing(&self) -> u8 {
        match self.phase {
            FramePhase::AwaitingFirst => PINS_PER_RACK,
            FramePhase::AwaitingSecond => self.remaining_after(0),
            FramePhase::AwaitingThird => self.remaining_after(1),
            FramePhase::Done => 0,
        }
    }

    fn remaining_after(&self, index: usize) -> u8 {
        match self.frame.throw(index) {
            Some(throw) if throw.is_full_rack() => PINS_PER_RACK,
            Some(throw) => PINS_PER_RACK - throw.pins_knocked_down(),
            None => PINS_PER_RACK,
        }
    }

    /// Records a throw and returns the events it announces, in order.
    ///
    /// Rejects the throw if the frame is already decided or if it knocked
    /// down more pins than were standing.
    #[instrument(skip(self), fields(frame = %self.frame.number(), phase = %self.phase))]
    pub fn record(&mut self, throw: Throw) -> Result<Vec<ThrowEvent>, GameError> {
        ThrowContract::pre(self, &throw)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let tenth = self.frame.number().is_tenth();
        let (events, next) = match self.phase {
            FramePhase::AwaitingFirst => {
                let next = if throw.is_full_rack() && !tenth {
                    FramePhase::Done
                } else {
                    FramePhase::AwaitingSecond
                };
                (first_ball_events(&throw), next)
            }
            FramePhase::AwaitingSecond if tenth => {
                let first = self.pins_at(0);
                let earned_bonus = first == PINS_PER_RACK
                    || first + throw.pins_knocked_down() == PINS_PER_RACK;
                let next = if earned_bonus {
                    FramePhase::AwaitingThird
                } else {
                    FramePhase::Done
                };
                (tenth_second_ball_events(first, &throw), next)
            }
            FramePhase::AwaitingSecond => {
                let first = self.pins_at(0);
                (second_ball_events(first, &throw), FramePhase::Done)
            }
            FramePhase::AwaitingThird => {
                let second = self.pins_at(1);
                (third_ball_events(second, &throw), FramePhase::Done)
            }
            FramePhase::Done => return Err(GameError::FrameClosed(self.frame.number())),
        };
        self.frame.add_throw(throw);
        self.phase = next;
        debug!(pins = throw.pins_knocked_down(), foul = throw.is_foul(), next = %next, ?events, "Throw recorded");

        #[cfg(debug_assertions)]
        ThrowContract::post(&before, self)?;

        Ok(events)
    }

    fn pins_at(&self, index: usize) -> u8 {
        self.frame
            .throw(index)
            .map_or(0, Throw::pins_knocked_down)
    }

    /// Closes the state machine and hands back the decided frame.
    #[instrument(skip(self), fields(frame = %self.frame.number()))]
    pub fn finish(self) -> Result<Frame, GameError> {
        if !self.is_done() {
            warn!(phase = %self.phase, "Frame finished early");
            return Err(GameError::InvariantViolation(format!(
                "Frame {} finished in phase {}",
                self.frame.number(),
                self.phase
            )));
        }
        invariants::check_decided(&self.frame).map_err(|violations| {
            GameError::InvariantViolation(InvariantViolation::join(&violations))
        })?;
        Ok(self.frame)
    }
}

/// Foul, else gutter, else strike.
fn first_ball_events(throw: &Throw) -> Vec<ThrowEvent> {
    if throw.is_foul() {
        vec![ThrowEvent::Foul]
    } else if throw.pins_knocked_down() == 0 {
        vec![ThrowEvent::Gutter]
    } else if throw.is_full_rack() {
        vec![ThrowEvent::Strike]
    } else {
        Vec::new()
    }
}

/// Foul, else gutter, else spare.
fn second_ball_events(first: u8, throw: &Throw) -> Vec<ThrowEvent> {
    if throw.is_foul() {
        vec![ThrowEvent::Foul]
    } else if throw.pins_knocked_down() == 0 {
        vec![ThrowEvent::Gutter]
    } else if first + throw.pins_knocked_down() == PINS_PER_RACK {
        vec![ThrowEvent::Spare]
    } else {
        Vec::new()
    }
}

/// Foul, else gutter, else strike, else spare (only when the first ball left pins).
fn tenth_second_ball_events(first: u8, throw: &Throw) -> Vec<ThrowEvent> {
    if throw.is_foul() {
        vec![ThrowEvent::Foul]
    } else if throw.pins_knocked_down() == 0 {
        vec![ThrowEvent::Gutter]
    } else if throw.is_full_rack() {
        vec![ThrowEvent::Strike]
    } else if first != PINS_PER_RACK && first + throw.pins_knocked_down() == PINS_PER_RACK {
        vec![ThrowEvent::Spare]
    } else {
        Vec::new()
    }
}

/// Foul or gutter, then independently strike or spare.
///
/// The two checks are not exclusive: a third ball of zero after a second-ball
/// strike announces both a gutter and a spare.
fn third_ball_events(second: u8, throw: &Throw) -> Vec<ThrowEvent> {
    let mut events = Vec::with_capacity(2);
    if throw.is_foul() {
        events.push(ThrowEvent::Foul);
    } else if throw.pins_knocked_down() == 0 {
        events.push(ThrowEvent::Gutter);
    }
    if throw.is_full_rack() {
        events.push(ThrowEvent::Strike);
    } else if second + throw.pins_knocked_down() == PINS_PER_RACK {
        events.push(ThrowEvent::Spare);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(pins: u8) -> Throw {
        Throw::new(pins, false).unwrap()
    }

    fn play(number: u8, pins: &[u8]) -> (FrameState, Vec<Vec<ThrowEvent>>) {
        let mut state = FrameState::new(FrameNumber::new(number).unwrap());
        let events = pins
            .iter()
            .map(|&p| state.record(clean(p)).expect("valid throw"))
            .collect();
        (state, events)
    }

    #[test]
    fn test_strike_closes_regular_frame() {
        let (state, events) = play(1, &[10]);
        assert!(state.is_done());
        assert_eq!(events, [vec![ThrowEvent::Strike]]);
    }

    #[test]
    fn test_second_ball_faces_remaining_pins() {
        let (state, _) = play(3, &[6]);
        assert_eq!(state.phase(), FramePhase::AwaitingSecond);
        assert_eq!(state.pins_standing(), 4);
    }

    #[test]
    fn test_spare_announced() {
        let (state, events) = play(2, &[7, 3]);
        assert!(state.is_done());
        assert_eq!(events[1], [ThrowEvent::Spare]);
    }

    #[test]
    fn test_gutter_beats_spare_check() {
        let (_, events) = play(2, &[0, 0]);
        assert_eq!(events, [vec![ThrowEvent::Gutter], vec![ThrowEvent::Gutter]]);
    }

    #[test]
    fn test_foul_reported_over_strike() {
        let mut state = FrameState::new(FrameNumber::FIRST);
        let events = state.record(Throw::new(10, true).unwrap()).unwrap();
        assert_eq!(events, [ThrowEvent::Foul]);
        assert!(state.is_done());
    }

    #[test]
    fn test_tenth_strike_resets_rack_for_second_ball() {
        let (state, _) = play(10, &[10]);
        assert_eq!(state.phase(), FramePhase::AwaitingSecond);
        assert_eq!(state.pins_standing(), 10);
    }

    #[test]
    fn test_tenth_open_frame_stops_after_two() {
        let (state, _) = play(10, &[4, 5]);
        assert!(state.is_done());
        assert_eq!(state.frame().throws().len(), 2);
    }

    #[test]
    fn test_tenth_spare_earns_third_ball() {
        let (state, events) = play(10, &[3, 7]);
        assert_eq!(state.phase(), FramePhase::AwaitingThird);
        assert_eq!(events[1], [ThrowEvent::Spare]);
        // The third ball faces what the second ball left.
        assert_eq!(state.pins_standing(), 3);
    }

    #[test]
    fn test_tenth_strike_then_partial_leaves_remainder() {
        let (state, _) = play(10, &[10, 4]);
        assert_eq!(state.phase(), FramePhase::AwaitingThird);
        assert_eq!(state.pins_standing(), 6);
    }

    #[test]
    fn test_tenth_turkey() {
        let (state, events) = play(10, &[10, 10, 10]);
        assert!(state.is_done());
        assert_eq!(
            events,
            [
                vec![ThrowEvent::Strike],
                vec![ThrowEvent::Strike],
                vec![ThrowEvent::Strike]
            ]
        );
    }

    #[test]
    fn test_tenth_third_ball_gutter_and_spare_both_announced() {
        let (_, events) = play(10, &[10, 10, 0]);
        assert_eq!(events[2], [ThrowEvent::Gutter, ThrowEvent::Spare]);
    }

    #[test]
    fn test_tenth_third_ball_spare_after_strike() {
        let (_, events) = play(10, &[10, 3, 7]);
        assert_eq!(events[2], [ThrowEvent::Spare]);
    }

    #[test]
    fn test_too_many_pins_rejected() {
        let mut state = FrameState::new(FrameNumber::FIRST);
        state.record(clean(8)).unwrap();
        assert!(matches!(
            state.record(clean(3)),
            Err(GameError::PinsExceedStanding { pins: 3, standing: 2 })
        ));
        assert_eq!(state.frame().throws().len(), 1);
    }

    #[test]
    fn test_closed_frame_rejects_throw() {
        let (mut state, _) = play(1, &[10]);
        assert!(matches!(
            state.record(clean(0)),
            Err(GameError::FrameClosed(_))
        ));
    }

    #[test]
    fn test_finish_requires_done() {
        let (state, _) = play(4, &[5]);
        assert!(matches!(
            state.finish(),
            Err(GameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_finish_returns_frame() {
        let (state, _) = play(4, &[5, 2]);
        let frame = state.finish().unwrap();
        assert_eq!(frame.pin_total(), 7);
    }

    #[test]
    fn test_foul_beats_spare_on_second_ball() {
        let mut state = FrameState::new(FrameNumber::FIRST);
        state.record(clean(3)).unwrap();
        let events = state.record(Throw::new(7, true).unwrap()).unwrap();
        assert_eq!(events, [ThrowEvent::Foul]);
        assert!(state.is_done());

        let mut tenth = FrameState::new(FrameNumber::TENTH);
        tenth.record(clean(3)).unwrap();
        let events = tenth.record(Throw::new(7, true).unwrap()).unwrap();
        assert_eq!(events, [ThrowEvent::Foul]);
        // The bonus ball is earned on pins down, fouled or not.
        assert_eq!(tenth.phase(), FramePhase::AwaitingThird);
    }

    #[test]
    fn test_tenth_gutter_then_ten_is_strike_not_spare() {
        let (state, events) = play(10, &[0, 10]);
        assert_eq!(events, [vec![ThrowEvent::Gutter], vec![ThrowEvent::Strike]]);
        assert_eq!(state.phase(), FramePhase::AwaitingThird);
        assert_eq!(state.pins_standing(), 10);
    }
}
