//! Frame order invariant: a player's frames are numbered 1, 2, 3, ...

use super::super::Player;
use super::Invariant;

/// Invariant: frames are appended in order with no gaps or repeats.
pub struct FrameOrderInvariant;

impl Invariant<Player> for FrameOrderInvariant {
    fn holds(player: &Player) -> bool {
        player
            .frames()
            .iter()
            .enumerate()
            .all(|(index, frame)| frame.number().index() == index)
    }

    fn description() -> &'static str {
        "Frames are recorded in order 1..10"
    }
}
