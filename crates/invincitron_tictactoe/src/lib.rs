//! Rule-driven tic-tac-toe engine.
//!
//! Picks a non-losing move for either mark by running an ordered cascade of
//! heuristics (win, block, fork, block fork, center, opposite corner, empty
//! corner, empty side), and drives two interchangeable move sources through a
//! game.
//!
//! # Example
//!
//! ```
//! use invincitron_tictactoe::{Board, Mark, StrategyPlayer, play_game, suggest_move};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! assert_eq!(suggest_move(&Board::new(), Mark::X, &mut rng), Some(4));
//!
//! let mut x = StrategyPlayer::with_seed("x", 1);
//! let mut o = StrategyPlayer::with_seed("o", 2);
//! let record = play_game(&mut x, &mut o).unwrap();
//! assert!(record.history().len() >= 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod players;
mod rules;
mod strategy;
mod threats;
mod types;

pub use error::EngineError;
pub use game::{GameRecord, play_game};
pub use players::{MoveSource, RandomPlayer, StrategyPlayer};
pub use rules::{Evaluation, Outcome, check_winner, evaluate, has_triple, is_tie};
pub use strategy::{Rule, RuleOutcome, Suggestion, suggest, suggest_move};
pub use threats::{can_block, find_completing_move};
pub use types::{Board, BoardParseError, CELLS, CENTER, CORNERS, Mark, SIDES, Square, TRIPLES};
