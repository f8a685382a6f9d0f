//! Invincitron - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use invincitron::{AppConfig, init_logging, play_human, prompt_side, simulate};
use invincitron_tictactoe::GameRecord;
use std::io;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            side,
            opponent,
            seed,
            json,
        } => run_play(
            config.with_human_mark(side).with_opponent(opponent).with_seed(seed),
            json,
        ),
        Command::Simulate {
            games,
            opponent,
            seed,
            json,
        } => run_simulate(
            config.with_games(games).with_opponent(opponent).with_seed(seed),
            json,
        ),
    }
}

/// Play one interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: AppConfig, json: bool) -> Result<()> {
    let human_mark = match *config.human_mark() {
        Some(mark) => mark,
        None => prompt_side(io::stdin().lock(), io::stdout())?
            .context("No side chosen before input closed")?,
    };
    println!("you are {human_mark}");

    let record = play_human(&config, human_mark, io::stdin().lock(), io::stdout())?;
    info!(outcome = %record.outcome(), "Game finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }
    Ok(())
}

/// Run a batch of automated games and print the tally
#[instrument(skip(config))]
fn run_simulate(config: AppConfig, json: bool) -> Result<()> {
    let tally = simulate(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("engine vs {}: {}", config.opponent(), tally);
    }
    Ok(())
}

fn print_record(record: &GameRecord) {
    println!("winner {}", record.outcome());
    println!("game board:");
    println!("{}", record.board().legend());
    println!("move sequence: {:?}", record.history());
}
