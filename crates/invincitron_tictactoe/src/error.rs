//! Engine error taxonomy.
//!
//! None of these are recoverable inside the engine: a strictly alternating
//! game on nine cells cannot reach them if move legality is enforced.

use crate::types::{Board, Mark};
use derive_more::{Display, Error};

/// Errors raised by the game loop, the terminal detector and move sources.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A move source chose an out-of-range or occupied cell.
    #[display("{mark} chose illegal cell {cell} after moves {history:?}")]
    IllegalMove {
        /// Mark that was on move.
        mark: Mark,
        /// The rejected cell.
        cell: usize,
        /// Board at the time of the violation.
        board: Board,
        /// Moves played before the violation.
        history: Vec<usize>,
    },

    /// A move was requested on a full board.
    #[display("{mark} was asked to move on a full board")]
    NoLegalMove {
        /// Mark that was asked to move.
        mark: Mark,
    },

    /// Both marks completed a triple.
    #[display("both marks hold a completed triple")]
    MultipleWinners,

    /// A move source could not produce a move (closed input, etc).
    #[display("move source {name} failed: {message}")]
    SourceFailed {
        /// Name of the failing source.
        name: String,
        /// What went wrong.
        message: String,
    },
}
