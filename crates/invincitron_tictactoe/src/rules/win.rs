//! Win detection logic for tic-tac-toe.

use crate::error::EngineError;
use crate::types::{Board, Mark, TRIPLES};
use strum::IntoEnumIterator;
use tracing::{error, instrument};

/// Checks whether `mark` holds all three cells of any triple.
pub fn has_triple(board: &Board, mark: Mark) -> bool {
    TRIPLES
        .iter()
        .any(|triple| triple.iter().all(|&cell| board.holds(cell, mark)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Ok(Some(mark))` if exactly one mark has three in a row and
/// `Ok(None)` if neither does.
///
/// # Errors
///
/// Returns [`EngineError::MultipleWinners`] if both marks have completed a
/// triple, which no legally alternating game can produce.
#[instrument(skip(board), fields(board = %board))]
pub fn check_winner(board: &Board) -> Result<Option<Mark>, EngineError> {
    let winners: Vec<Mark> = Mark::iter().filter(|&mark| has_triple(board, mark)).collect();

    match winners.as_slice() {
        [] => Ok(None),
        [winner] => Ok(Some(*winner)),
        _ => {
            error!("Both marks completed a triple");
            Err(EngineError::MultipleWinners)
        }
    }
}
