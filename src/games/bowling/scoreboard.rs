//! Fixed-width scoreboard table.

use super::frame::{Frame, FrameNumber};
use super::player::Player;
use super::throw::{PINS_PER_RACK, Throw};
use tracing::instrument;

/// Minimum width of the name column.
const NAME_WIDTH: usize = 10;

/// Characters per throw slot.
const SLOT_WIDTH: usize = 3;

/// Renders players' frames as a table of throw symbols and totals.
///
/// ```text
/// Frame     | 1     | 2     | ... | 10       | Total
/// Throw     | 1  2  | 1  2  | ... | 1  2  3  |
/// ---------------------------------------------------
/// Alice     | X     | 7  /  | ... | X  X  X  |   201
///           | 20    | 34    | ... | 201      |
/// ---------------------------------------------------
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScoreBoard<'a> {
    players: &'a [Player],
}

impl<'a> ScoreBoard<'a> {
    /// Creates a scoreboard over the given players.
    pub fn new(players: &'a [Player]) -> Self {
        Self { players }
    }

    /// Renders the table.
    #[instrument(skip(self), fields(players = self.players.len()))]
    pub fn render(&self) -> String {
        let name_width = self
            .players
            .iter()
            .map(|p| p.name().chars().count() + 1)
            .max()
            .unwrap_or(0)
            .max(NAME_WIDTH);

        let mut header = format!("{:<name_width$}", "Frame");
        let mut throw_line = format!("{:<name_width$}", "Throw");
        for number in FrameNumber::all() {
            header.push_str(&cell(&number.to_string(), number));
            let indices: String = (1..=number.max_throws())
                .map(|i| format!("{:<SLOT_WIDTH$}", i))
                .collect();
            throw_line.push_str(&cell(&indices, number));
        }
        header.push_str("| Total");
        throw_line.push('|');
        let separator = "-".repeat(header.chars().count());

        let mut table = String::new();
        for line in [&header, &throw_line, &separator] {
            table.push_str(line);
            table.push('\n');
        }
        for player in self.players {
            table.push_str(&player_line(player, name_width));
            table.push('\n');
            if let Ok(running) = player.running_totals() {
                table.push_str(&running_line(&running, name_width));
                table.push('\n');
            }
            table.push_str(&separator);
            table.push('\n');
        }
        table
    }
}

impl std::fmt::Display for ScoreBoard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// One frame column, padded to the frame's throw slots.
fn cell(content: &str, number: FrameNumber) -> String {
    let width = number.max_throws() * SLOT_WIDTH;
    format!("| {:<width$}", content)
}

fn player_line(player: &Player, name_width: usize) -> String {
    let mut line = format!("{:<name_width$}", player.name());
    for number in FrameNumber::all() {
        let symbols: String = match player.frames().get(number.index()) {
            Some(frame) => frame
                .throws()
                .iter()
                .enumerate()
                .map(|(index, throw)| format!("{:<SLOT_WIDTH$}", throw_symbol(frame, index, throw)))
                .collect(),
            None => String::new(),
        };
        line.push_str(&cell(&symbols, number));
    }
    match player.total_score() {
        Ok(total) => line.push_str(&format!("| {:>5}", total)),
        Err(_) => line.push_str("|     -"),
    }
    line
}

fn running_line(running: &[u16], name_width: usize) -> String {
    let mut line = " ".repeat(name_width);
    for (number, total) in FrameNumber::all().zip(running) {
        line.push_str(&cell(&total.to_string(), number));
    }
    line.push('|');
    line
}

/// Symbol for one throw: `F` foul, `X` strike, `/` spare, `-` miss, else the count.
pub fn throw_symbol(frame: &Frame, index: usize, throw: &Throw) -> String {
    let tenth = frame.number().is_tenth();
    if throw.is_foul() {
        return "F".to_string();
    }
    if throw.is_full_rack() && (index == 0 || tenth) {
        return "X".to_string();
    }
    let completes_spare = !tenth
        && index > 0
        && frame.throw(index - 1).is_some_and(|previous| {
            previous.effective_score() + throw.effective_score() == PINS_PER_RACK
        });
    if completes_spare {
        "/".to_string()
    } else if throw.pins_knocked_down() == 0 {
        "-".to_string()
    } else {
        throw.pins_knocked_down().to_string()
    }
}
