//! Score calculation over a completed frame sheet.
//!
//! Scoring is a pure pass over an immutable slice of frames: strike and spare
//! bonuses look ahead into the frames that follow, so nothing is scored
//! until all ten frames exist.

use super::frame::{FRAMES_PER_GAME, Frame};
use super::throw::PINS_PER_RACK;
use tracing::{debug, instrument};

/// Error scoring a frame sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ScoreError {
    /// Fewer (or more) than ten frames were recorded.
    #[display("A completed game has 10 frames, got {}", frames)]
    IncompleteGame {
        /// Frames actually recorded.
        frames: usize,
    },
}

impl std::error::Error for ScoreError {}

/// Total score for a completed ten-frame sheet.
#[instrument(skip(frames), fields(frames = frames.len()))]
pub fn total_score(frames: &[Frame]) -> Result<u16, ScoreError> {
    let total = running_totals(frames)?.last().copied().unwrap_or_default();
    debug!(total, "Total score calculated");
    Ok(total)
}

/// Cumulative score after each of the ten frames.
#[instrument(skip(frames), fields(frames = frames.len()))]
pub fn running_totals(frames: &[Frame]) -> Result<Vec<u16>, ScoreError> {
    ensure_complete(frames)?;
    let totals = (0..frames.len())
        .scan(0u16, |running, index| {
            *running += frame_score(frames, index);
            Some(*running)
        })
        .collect();
    Ok(totals)
}

/// Score credited to the frame at `index`, including its bonus.
///
/// The tenth frame already holds its own bonus throws, so it scores its pins
/// with no lookahead.
pub(crate) fn frame_score(frames: &[Frame], index: usize) -> u16 {
    let frame = &frames[index];
    if frame.number().is_tenth() {
        frame.pin_total()
    } else if frame.is_strike() {
        u16::from(PINS_PER_RACK) + strike_bonus(frames, index)
    } else if frame.is_spare() {
        u16::from(PINS_PER_RACK) + spare_bonus(frames, index)
    } else {
        frame.pin_total()
    }
}

/// Bonus for a strike at `index`: the next two throws.
///
/// Takes both throws of the next frame when it has two; when the next frame
/// is a lone strike the second throw comes from the frame after it.
pub(crate) fn strike_bonus(frames: &[Frame], index: usize) -> u16 {
    let Some(next) = frames.get(index + 1) else {
        return 0;
    };
    let mut bonus = first_throw_score(next);
    if let Some(second) = next.throw(1) {
        bonus += u16::from(second.effective_score());
    } else if next.is_strike() {
        bonus += frames.get(index + 2).map_or(0, first_throw_score);
    }
    bonus
}

/// Bonus for a spare at `index`: the next throw.
pub(crate) fn spare_bonus(frames: &[Frame], index: usize) -> u16 {
    frames.get(index + 1).map_or(0, first_throw_score)
}

fn first_throw_score(frame: &Frame) -> u16 {
    frame
        .throw(0)
        .map_or(0, |t| u16::from(t.effective_score()))
}

fn ensure_complete(frames: &[Frame]) -> Result<(), ScoreError> {
    if frames.len() == usize::from(FRAMES_PER_GAME) {
        Ok(())
    } else {
        Err(ScoreError::IncompleteGame {
            frames: frames.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::bowling::frame::FrameNumber;
    use crate::games::bowling::throw::Throw;

    /// Builds a ten-frame sheet from per-frame pin lists, no fouls.
    fn sheet(frames: [&[u8]; 10]) -> Vec<Frame> {
        FrameNumber::all()
            .zip(frames)
            .map(|(number, pins)| {
                Frame::with_throws(
                    number,
                    pins.iter().map(|&p| Throw::new(p, false).unwrap()),
                )
            })
            .collect()
    }

    const OPEN: &[u8] = &[0, 0];

    #[test]
    fn test_perfect_game() {
        let frames = sheet([
            &[10], &[10], &[10], &[10], &[10], &[10], &[10], &[10], &[10], &[10, 10, 10],
        ]);
        assert_eq!(total_score(&frames), Ok(300));
    }

    #[test]
    fn test_gutter_game() {
        let frames = sheet([OPEN; 10]);
        assert_eq!(total_score(&frames), Ok(0));
    }

    #[test]
    fn test_all_spares_with_five() {
        let frames = sheet([
            &[5, 5], &[5, 5], &[5, 5], &[5, 5], &[5, 5], &[5, 5], &[5, 5], &[5, 5], &[5, 5],
            &[5, 5, 5],
        ]);
        assert_eq!(total_score(&frames), Ok(150));
    }

    #[test]
    fn test_strike_in_ninth_reads_tenth() {
        let frames = sheet([
            OPEN, OPEN, OPEN, OPEN, OPEN, OPEN, OPEN, OPEN, &[10], &[3, 4],
        ]);
        // 10 + 3 + 4, then 7
        assert_eq!(total_score(&frames), Ok(24));
    }

    #[test]
    fn test_strike_in_ninth_before_tenth_strike() {
        let frames = sheet([
            OPEN, OPEN, OPEN, OPEN, OPEN, OPEN, OPEN, OPEN, &[10], &[10, 10, 10],
        ]);
        assert_eq!(total_score(&frames), Ok(60));
    }

    #[test]
    fn test_running_totals_end_at_total() {
        let frames = sheet([
            &[10], &[7, 3], &[4, 2], OPEN, OPEN, OPEN, OPEN, OPEN, OPEN, OPEN,
        ]);
        let totals = running_totals(&frames).unwrap();
        assert_eq!(totals[..3], [20, 34, 40]);
        assert_eq!(totals.last(), Some(&40));
        assert_eq!(total_score(&frames), Ok(40));
    }

    #[test]
    fn test_fouled_bonus_throw_adds_nothing() {
        let mut frames = sheet([OPEN; 10]);
        frames[0] = Frame::with_throws(FrameNumber::FIRST, [Throw::new(10, false).unwrap()]);
        frames[1] = Frame::with_throws(
            FrameNumber::new(2).unwrap(),
            [Throw::new(6, true).unwrap(), Throw::new(3, false).unwrap()],
        );
        // 10 + 0 + 3, then 3
        assert_eq!(total_score(&frames), Ok(16));
    }

    #[test]
    fn test_incomplete_sheet_rejected() {
        let frames = sheet([OPEN; 10]);
        assert_eq!(
            total_score(&frames[..9]),
            Err(ScoreError::IncompleteGame { frames: 9 })
        );
    }

    #[test]
    fn test_bonus_without_next_frame_is_zero() {
        let frames = sheet([OPEN; 10]);
        assert_eq!(strike_bonus(&frames[..1], 0), 0);
        assert_eq!(spare_bonus(&frames[..1], 0), 0);
    }
}
