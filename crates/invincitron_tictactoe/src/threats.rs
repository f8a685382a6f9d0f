//! Two-in-a-row detection.
//!
//! Winning and blocking share one scan: blocking is finding the opponent's
//! completing move.

use crate::types::{Board, Mark, Square, TRIPLES};
use tracing::instrument;

/// Returns the empty cell of a triple holding exactly two of `mark` and one
/// empty cell.
///
/// Triples are scanned in [`TRIPLES`] order (rows, columns, diagonals) and the
/// first match wins.
#[instrument(skip(board), fields(board = %board))]
pub fn find_completing_move(board: &Board, mark: Mark) -> Option<usize> {
    TRIPLES.iter().find_map(|triple| completing_cell(board, triple, mark))
}

/// The cell that stops the opponent from completing a triple next turn.
#[instrument(skip(board), fields(board = %board))]
pub fn can_block(board: &Board, mark: Mark) -> Option<usize> {
    find_completing_move(board, mark.opponent())
}

fn completing_cell(board: &Board, triple: &[usize; 3], mark: Mark) -> Option<usize> {
    let mut empty = None;
    let mut own = 0;

    for &cell in triple {
        match board.get(cell)? {
            Square::Empty if empty.is_none() => empty = Some(cell),
            Square::Empty => return None,
            Square::Occupied(m) if m == mark => own += 1,
            Square::Occupied(_) => return None,
        }
    }

    if own == 2 { empty } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_top_row() {
        let board: Board = "XX_ ___ ___".parse().unwrap();
        assert_eq!(find_completing_move(&board, Mark::X), Some(2));
        assert_eq!(find_completing_move(&board, Mark::O), None);
    }

    #[test]
    fn test_gap_in_the_middle() {
        let board: Board = "O__ ___ O__".parse().unwrap();
        assert_eq!(find_completing_move(&board, Mark::O), Some(3));
    }

    #[test]
    fn test_blocked_triple_is_ignored() {
        let board: Board = "XXO ___ ___".parse().unwrap();
        assert_eq!(find_completing_move(&board, Mark::X), None);
    }

    #[test]
    fn test_rows_scanned_before_columns_and_diagonals() {
        // Row 1 (3,4,_) and column 0 (0,3,_) and diagonal (0,4,_) all complete.
        let board: Board = "X__ XX_ ___".parse().unwrap();
        assert_eq!(find_completing_move(&board, Mark::X), Some(5));
    }

    #[test]
    fn test_block_is_opponent_completion() {
        let board: Board = "XX_ ___ ___".parse().unwrap();
        assert_eq!(can_block(&board, Mark::O), Some(2));
        assert_eq!(can_block(&board, Mark::X), None);
    }

    #[test]
    fn test_full_board_has_no_completion() {
        let board: Board = "OXO XOX XOX".parse().unwrap();
        assert_eq!(find_completing_move(&board, Mark::X), None);
        assert_eq!(find_completing_move(&board, Mark::O), None);
    }
}
