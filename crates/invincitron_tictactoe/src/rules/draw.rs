//! Tie detection logic for tic-tac-toe.

use crate::types::Board;

/// A tie is a full board on which no one has won.
///
/// Takes the already-computed winner so the triples are scanned once per
/// evaluation.
pub fn is_tie(board: &Board, has_winner: bool) -> bool {
    !has_winner && board.is_full()
}
