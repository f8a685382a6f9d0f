//! Move source trait and automated implementations.

mod random;
mod strategy;

pub use random::RandomPlayer;
pub use strategy::StrategyPlayer;

use crate::error::EngineError;
use crate::types::{Board, Mark};

/// Anything that can pick the next cell for a mark.
///
/// Implementations must return a currently unmarked cell. Asking for a move
/// on a full board is a caller error and yields [`EngineError::NoLegalMove`].
pub trait MoveSource {
    /// Gets a move from this source for `mark` on `board`.
    ///
    /// Returns the cell (0-8) for the next move.
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<usize, EngineError>;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

impl<T: MoveSource + ?Sized> MoveSource for Box<T> {
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<usize, EngineError> {
        (**self).next_move(board, mark)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
