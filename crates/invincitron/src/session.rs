//! Game sessions: one human game, or a batch of automated games.

use crate::config::AppConfig;
use crate::players::HumanPlayer;
use derive_getters::Getters;
use invincitron_tictactoe::{
    EngineError, GameRecord, Mark, MoveSource, Outcome, StrategyPlayer, play_game,
};
use serde::Serialize;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{error, info, instrument};

/// Plays the human (as `human_mark`) against the configured opponent.
///
/// X always moves first, whichever side the human picked.
#[instrument(skip(config, input, output))]
pub fn play_human<R: BufRead, W: Write>(
    config: &AppConfig,
    human_mark: Mark,
    input: R,
    output: W,
) -> Result<GameRecord, EngineError> {
    let mut human = HumanPlayer::new("you", input, output);
    let mut opponent = config.opponent().build("invincitron", *config.seed());

    info!(%human_mark, opponent = %config.opponent(), "Starting human game");
    match human_mark {
        Mark::X => play_game(&mut human, opponent.as_mut()),
        Mark::O => play_game(opponent.as_mut(), &mut human),
    }
}

/// Results of a batch of engine games, counted from the engine's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Tally {
    /// Games played.
    games: u32,
    /// Games the engine won.
    wins: u32,
    /// Games the engine lost.
    losses: u32,
    /// Tied games.
    ties: u32,
    /// Losses while the engine moved second.
    losses_as_o: u32,
}

impl Tally {
    /// Counts one finished game in which the engine played `engine_mark`.
    ///
    /// An unfinished outcome is logged and left out of every count.
    pub fn record(&mut self, outcome: Outcome, engine_mark: Mark) {
        match outcome {
            Outcome::Winner(mark) if mark == engine_mark => self.wins += 1,
            Outcome::Winner(_) => {
                self.losses += 1;
                if engine_mark == Mark::O {
                    self.losses_as_o += 1;
                }
            }
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {
                error!(%engine_mark, "Unfinished game reported to tally, not counted");
                return;
            }
        }
        self.games += 1;
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "games: {}  wins: {}  losses: {} ({} as O)  ties: {}",
            self.games, self.wins, self.losses, self.losses_as_o, self.ties
        )
    }
}

/// Plays `config.games()` games of the engine against the configured opponent.
///
/// The engine takes X in even-numbered games and O in odd ones. With a seed,
/// game `i` seeds the engine with `seed + 2i` and the opponent with
/// `seed + 2i + 1`, so any single game can be replayed.
#[instrument(skip(config), fields(games = *config.games(), opponent = %config.opponent()))]
pub fn simulate(config: &AppConfig) -> Result<Tally, EngineError> {
    let mut tally = Tally::default();

    for game in 0..*config.games() {
        let base = config.seed().map(|seed| seed.wrapping_add(2 * u64::from(game)));
        let mut engine: Box<dyn MoveSource> = match base {
            Some(seed) => Box::new(StrategyPlayer::with_seed("invincitron", seed)),
            None => Box::new(StrategyPlayer::new("invincitron")),
        };
        let mut opponent = config
            .opponent()
            .build("opponent", base.map(|seed| seed.wrapping_add(1)));

        let engine_mark = if game % 2 == 0 { Mark::X } else { Mark::O };
        let record = match engine_mark {
            Mark::X => play_game(engine.as_mut(), opponent.as_mut())?,
            Mark::O => play_game(opponent.as_mut(), engine.as_mut())?,
        };
        tally.record(*record.outcome(), engine_mark);
    }

    info!(%tally, "Simulation finished");
    Ok(tally)
}
