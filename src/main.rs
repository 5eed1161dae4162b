//! Strictly Bowling - terminal scorer
//!
//! Plays interactive or computer-driven games, or scores a fixed list of pin
//! counts for one player.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use strictly_bowling::{
    BowlingConfig, ConsoleBowler, ConsoleSink, FixedFoulSampler, FoulChance, FoulSampler,
    GameFinished, GameSetup, MessageSink, RandomBowler, RecordingSink, ScriptedBowler,
    SeededFoulSampler, ThreadFoulSampler, ThrowSource, create_players, players_from_names,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the game; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            foul_chance,
            seed,
            auto,
            bots,
            players,
        } => {
            let mut settings = match config {
                Some(path) => BowlingConfig::from_file(path)?,
                None => BowlingConfig::default(),
            };
            if let Some(percent) = foul_chance {
                settings = settings.with_foul_chance(FoulChance::new(percent)?);
            }
            if let Some(seed) = seed {
                settings = settings.with_seed(seed);
            }
            if !players.is_empty() {
                settings = settings.with_players(players);
            }
            run_play(settings, auto, bots)
        }
        Command::Score { name, pins } => run_score(name, pins),
    }
}

/// Play a full game with the console or the random bowler.
#[instrument(skip(settings), fields(foul_chance = %settings.foul_chance()))]
fn run_play(settings: BowlingConfig, auto: bool, bots: usize) -> Result<()> {
    info!("Starting bowling game");

    let mut sampler: Box<dyn FoulSampler> = match settings.seed() {
        Some(seed) => Box::new(SeededFoulSampler::seeded(*seed)),
        None => Box::new(ThreadFoulSampler::thread()),
    };
    let mut source: Box<dyn ThrowSource> = if auto {
        match settings.seed() {
            // Offset so pin counts and foul draws use different streams.
            Some(seed) => Box::new(RandomBowler::seeded(bots, seed.wrapping_add(1))),
            None => Box::new(RandomBowler::new(bots)),
        }
    } else {
        Box::new(ConsoleBowler::stdio())
    };
    let mut sink = ConsoleSink::stdout();

    let roster = if settings.players().is_empty() {
        create_players(source.as_mut(), &mut sink)?
    } else {
        players_from_names(settings.players().iter().cloned())?
    };
    debug!(players = roster.len(), "Roster ready");

    let finished = GameSetup::new(roster)?
        .with_foul_chance(*settings.foul_chance())
        .play(source.as_mut(), &mut sink, sampler.as_mut())?;

    announce(&finished, &mut sink);
    Ok(())
}

/// Score one player's pin counts with fouls disabled.
#[instrument(skip(pins), fields(throws = pins.len()))]
fn run_score(name: String, pins: Vec<u8>) -> Result<()> {
    let mut bowler = ScriptedBowler::for_players(pins, [name.clone()]);
    let mut recording = RecordingSink::new();

    let finished = GameSetup::new(players_from_names([name])?)?
        .with_foul_chance(FoulChance::NEVER)
        .play(&mut bowler, &mut recording, &mut FixedFoulSampler::never())?;

    if bowler.remaining() > 0 {
        bail!(
            "{} pin count(s) left over after the tenth frame",
            bowler.remaining()
        );
    }

    announce(&finished, &mut ConsoleSink::stdout());
    Ok(())
}

/// Print the final scoreboard and the winner.
fn announce(finished: &GameFinished, sink: &mut dyn MessageSink) {
    sink.display_message(&finished.scoreboard().render());
    let leaders = finished.leaders();
    let best = leaders
        .first()
        .and_then(|name| finished.total_for(name))
        .unwrap_or_default();
    match leaders.as_slice() {
        [winner] => sink.display_message(&format!("{} wins with {}!", winner, best)),
        tied => sink.display_message(&format!("Tie at {}: {}", best, tied.join(", "))),
    }
}
