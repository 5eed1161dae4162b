//! Roster collection: how many players, and their names.

use super::error::GameError;
use super::player::Player;
use super::ports::{MessageSink, ThrowSource};
use tracing::{info, instrument, warn};

/// Asks the collaborator for a player count and one name per player.
///
/// Counts below one are asked again; names must be non-empty.
#[instrument(skip_all)]
pub fn create_players(
    source: &mut dyn ThrowSource,
    sink: &mut dyn MessageSink,
) -> Result<Vec<Player>, GameError> {
    let count = loop {
        sink.display_message("Number of players (minimum 1): ");
        match source.request_player_count()? {
            0 => warn!("Player count below minimum"),
            count => break count,
        }
    };

    let mut players = Vec::with_capacity(count);
    for ordinal in 1..=count {
        sink.display_message(&format!("Name for player {}: ", ordinal));
        let name = source.request_player_name(ordinal)?;
        players.push(Player::new(name)?);
    }
    info!(count, "Roster created");
    Ok(players)
}

/// Builds players from preset names.
#[instrument(skip_all)]
pub fn players_from_names<I, S>(names: I) -> Result<Vec<Player>, GameError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let players = names
        .into_iter()
        .map(|name| Player::new(name))
        .collect::<Result<Vec<_>, _>>()?;
    if players.is_empty() {
        return Err(GameError::NoPlayers);
    }
    Ok(players)
}
