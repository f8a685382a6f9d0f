//! Command-line interface for invincitron.

use clap::{Parser, Subcommand};
use invincitron::OpponentKind;
use invincitron_tictactoe::Mark;
use std::path::PathBuf;

/// Invincitron - a tic-tac-toe opponent that plays the classic rule cascade
#[derive(Parser, Debug)]
#[command(name = "invincitron")]
#[command(about = "Play tic-tac-toe against a rule-driven engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./invincitron.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game against the engine in the terminal
    Play {
        /// Mark to play (X moves first). Asked interactively if not configured.
        #[arg(short, long)]
        side: Option<Mark>,

        /// Opponent to play against
        #[arg(long, value_enum)]
        opponent: Option<OpponentKind>,

        /// Seed for the opponent's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the game record as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run automated games of the engine against an opponent and tally results
    Simulate {
        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,

        /// Opponent to play against
        #[arg(long, value_enum)]
        opponent: Option<OpponentKind>,

        /// Base seed; every game is reproducible from it
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
