//! Contract-based validation for recording throws.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::error::GameError;
use super::invariants::{InvariantSet, InvariantViolation, OpenFrameInvariants};
use super::state::FrameState;
use super::throw::Throw;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Throw Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the frame still accepts throws.
pub struct FrameOpen;

impl FrameOpen {
    /// Fails with [`GameError::FrameClosed`] once the frame is decided.
    #[instrument(skip(state))]
    pub fn check(state: &FrameState) -> Result<(), GameError> {
        if state.is_done() {
            warn!(frame = %state.frame().number(), "Throw offered to a closed frame");
            Err(GameError::FrameClosed(state.frame().number()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the throw knocked down no more pins than were standing.
pub struct WithinStanding;

impl WithinStanding {
    /// Fails with [`GameError::PinsExceedStanding`] when the throw breaks its bound.
    #[instrument(skip(state))]
    pub fn check(throw: &Throw, state: &FrameState) -> Result<(), GameError> {
        let standing = state.pins_standing();
        let pins = throw.pins_knocked_down();
        if pins > standing {
            warn!(pins, standing, "Throw exceeds pins standing");
            Err(GameError::PinsExceedStanding { pins, standing })
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Throw Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for recording a throw on a frame in play.
///
/// Preconditions:
/// - Frame is not yet decided
/// - Pins knocked down are within pins standing
///
/// Postconditions:
/// - Exactly one throw was appended
/// - Throw cap and rack invariants still hold
pub struct ThrowContract;

impl Contract<FrameState, Throw> for ThrowContract {
    fn pre(state: &FrameState, throw: &Throw) -> Result<(), GameError> {
        FrameOpen::check(state)?;
        WithinStanding::check(throw, state)
    }

    fn post(before: &FrameState, after: &FrameState) -> Result<(), GameError> {
        let appended = after.frame().throws().len() == before.frame().throws().len() + 1;
        if !appended {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: recording must append exactly one throw".to_string(),
            ));
        }
        OpenFrameInvariants::check_all(after.frame()).map_err(|violations| {
            GameError::InvariantViolation(format!(
                "Postcondition failed: {}",
                InvariantViolation::join(&violations)
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::bowling::{FrameNumber, Throw};

    fn clean(pins: u8) -> Throw {
        Throw::new(pins, false).unwrap()
    }

    #[test]
    fn test_precondition_fresh_rack() {
        let state = FrameState::new(FrameNumber::FIRST);
        assert!(ThrowContract::pre(&state, &clean(10)).is_ok());
    }

    #[test]
    fn test_precondition_exceeds_standing() {
        let mut state = FrameState::new(FrameNumber::FIRST);
        state.record(clean(6)).unwrap();
        assert!(matches!(
            ThrowContract::pre(&state, &clean(5)),
            Err(GameError::PinsExceedStanding { pins: 5, standing: 4 })
        ));
    }

    #[test]
    fn test_precondition_closed_frame() {
        let mut state = FrameState::new(FrameNumber::FIRST);
        state.record(clean(10)).unwrap();
        assert!(matches!(
            ThrowContract::pre(&state, &clean(0)),
            Err(GameError::FrameClosed(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_record() {
        let before = FrameState::new(FrameNumber::FIRST);
        let mut after = before.clone();
        after.record(clean(4)).unwrap();
        assert!(ThrowContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = FrameState::new(FrameNumber::FIRST);
        let mut after = before.clone();
        after.record(clean(8)).unwrap();
        // Bypass the precondition to overfill the rack.
        after.frame.add_throw(clean(8));
        let mut before = before;
        before.frame.add_throw(clean(8));
        assert!(ThrowContract::post(&before, &after).is_err());
    }
}
