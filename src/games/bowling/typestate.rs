//! Phase-specific typestate structs for a bowling game.
//!
//! A [`GameSetup`] holds the roster and foul chance. Playing it consumes the
//! setup and returns a [`GameFinished`], which always carries ten frames and a
//! total for every player.

use super::director::FrameDirector;
use super::error::GameError;
use super::foul::{FoulChance, FoulSampler};
use super::player::Player;
use super::ports::{MessageSink, ThrowSource};
use super::scoreboard::ScoreBoard;
use tracing::{info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: a roster with no frames played.
#[derive(Debug, Clone)]
pub struct GameSetup {
    players: Vec<Player>,
    foul_chance: FoulChance,
}

impl GameSetup {
    /// Creates a game for the given players with the default foul chance.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(Self {
            players,
            foul_chance: FoulChance::default(),
        })
    }

    /// Sets the per-throw foul chance.
    pub fn with_foul_chance(mut self, foul_chance: FoulChance) -> Self {
        self.foul_chance = foul_chance;
        self
    }

    /// Returns the roster.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the foul chance.
    pub fn foul_chance(&self) -> FoulChance {
        self.foul_chance
    }

    /// Plays ten frames for every player (consumes setup, returns finished).
    #[instrument(skip_all, fields(players = self.players.len()))]
    pub fn play(
        self,
        source: &mut dyn ThrowSource,
        sink: &mut dyn MessageSink,
        sampler: &mut dyn FoulSampler,
    ) -> Result<GameFinished, GameError> {
        let mut players = self.players;
        FrameDirector::new(source, sink, sampler, self.foul_chance).play(&mut players)?;

        let totals = players
            .iter()
            .map(Player::total_score)
            .collect::<Result<Vec<_>, _>>()?;
        info!(?totals, "Final scores");

        Ok(GameFinished {
            players,
            totals,
            foul_chance: self.foul_chance,
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished: every player has ten frames and a total.
#[derive(Debug, Clone)]
pub struct GameFinished {
    players: Vec<Player>,
    totals: Vec<u16>,
    foul_chance: FoulChance,
}

impl GameFinished {
    /// Returns the players with their completed frames.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns each player's name with their total, in roster order.
    pub fn totals(&self) -> impl Iterator<Item = (&str, u16)> {
        self.players
            .iter()
            .map(Player::name)
            .zip(self.totals.iter().copied())
    }

    /// Returns the total for the named player.
    pub fn total_for(&self, name: &str) -> Option<u16> {
        self.totals()
            .find(|(player, _)| *player == name)
            .map(|(_, total)| total)
    }

    /// Returns the players sharing the highest total.
    pub fn leaders(&self) -> Vec<&str> {
        let best = self.totals.iter().copied().max().unwrap_or_default();
        self.totals()
            .filter(|(_, total)| *total == best)
            .map(|(name, _)| name)
            .collect()
    }

    /// Returns the final scoreboard.
    pub fn scoreboard(&self) -> ScoreBoard<'_> {
        ScoreBoard::new(&self.players)
    }

    /// Starts over with the same roster and foul chance (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        let players = self
            .players
            .into_iter()
            .map(|mut player| {
                player.clear_frames();
                player
            })
            .collect();
        GameSetup {
            players,
            foul_chance: self.foul_chance,
        }
    }
}
