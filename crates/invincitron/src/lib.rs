//! Invincitron: a tic-tac-toe opponent that plays the classic rule cascade.
//!
//! # Architecture
//!
//! - **Engine**: board, rules and move selection live in `invincitron_tictactoe`
//! - **Players**: an interactive [`HumanPlayer`] reading keys 1-9
//! - **Sessions**: a single human game, or batches of automated games
//! - **Config**: TOML settings overridden from the command line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod logging;
mod players;
mod session;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, OpponentKind};
pub use logging::init as init_logging;
pub use players::{HumanPlayer, prompt_side};
pub use session::{Tally, play_human, simulate};
