//! Command-line interface for strictly_bowling.

use clap::{Parser, Subcommand};

/// Strictly Bowling - ten-pin bowling scorer
#[derive(Parser, Debug)]
#[command(name = "strictly_bowling")]
#[command(about = "Score ten-pin bowling games at the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a full game, entering pin counts at the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Percent chance (0-100) that a throw is a foul
        #[arg(long)]
        foul_chance: Option<u8>,

        /// Seed for foul draws and auto-play
        #[arg(long)]
        seed: Option<u64>,

        /// Let the computer throw for every player
        #[arg(long)]
        auto: bool,

        /// Number of computer bowlers in auto-play when no names are given
        #[arg(long, default_value = "1")]
        bots: usize,

        /// Player name (repeatable); skips the roster prompts
        #[arg(short, long = "player")]
        players: Vec<String>,
    },

    /// Score one player's pin counts, with no fouls
    Score {
        /// Player name shown on the scoreboard
        #[arg(short, long, default_value = "Player1")]
        name: String,

        /// Pins knocked down by each throw, in order
        #[arg(required = true)]
        pins: Vec<u8>,
    },
}
