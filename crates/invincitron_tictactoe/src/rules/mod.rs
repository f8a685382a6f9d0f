//! Terminal-state rules for tic-tac-toe.
//!
//! Pure functions over a borrowed board. The outcome is recomputed from
//! scratch on every call and never cached.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{check_winner, has_triple};

use crate::error::EngineError;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// State of a game as read off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// The mark completed a triple.
    #[display("{}", _0)]
    Winner(Mark),
    /// The board is full with no winner.
    #[display("TIE")]
    Tie,
    /// Neither won nor tied.
    #[display("in progress")]
    InProgress,
}

/// Result of [`evaluate`]: who won, and whether the game is tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    winner: Option<Mark>,
    is_tie: bool,
}

impl Evaluation {
    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// True when the board is full and nobody won.
    pub fn is_tie(&self) -> bool {
        self.is_tie
    }

    /// True when the game has ended either way.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_tie
    }

    /// Collapses the evaluation into an [`Outcome`].
    pub fn outcome(&self) -> Outcome {
        match (self.winner, self.is_tie) {
            (Some(mark), _) => Outcome::Winner(mark),
            (None, true) => Outcome::Tie,
            (None, false) => Outcome::InProgress,
        }
    }
}

/// Determines whether the board is won (and by whom) or tied.
///
/// A won board with empty cells left is legal and is not a tie.
///
/// # Errors
///
/// Returns [`EngineError::MultipleWinners`] if both marks completed a triple.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Result<Evaluation, EngineError> {
    let winner = check_winner(board)?;
    Ok(Evaluation {
        winner,
        is_tie: is_tie(board, winner.is_some()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        let evaluation = evaluate(&Board::new()).unwrap();
        assert_eq!(evaluation.winner(), None);
        assert!(!evaluation.is_tie());
        assert_eq!(evaluation.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_win_with_empty_cells_is_not_tie() {
        let board: Board = "XXX OO_ ___".parse().unwrap();
        let evaluation = evaluate(&board).unwrap();
        assert_eq!(evaluation.outcome(), Outcome::Winner(Mark::X));
        assert!(!evaluation.is_tie());
        assert!(evaluation.is_over());
    }

    #[test]
    fn test_every_triple_evaluates_as_win() {
        use crate::types::{CELLS, Square, TRIPLES};

        for mark in [Mark::X, Mark::O] {
            for triple in TRIPLES {
                let mut squares = [Square::Empty; CELLS];
                for cell in triple {
                    squares[cell] = Square::Occupied(mark);
                }
                let evaluation = evaluate(&Board::from_squares(squares)).unwrap();
                assert_eq!(evaluation.winner(), Some(mark), "triple {triple:?}");
                assert!(!evaluation.is_tie(), "triple {triple:?}");
            }
        }
    }

    #[test]
    fn test_two_winners_is_an_error() {
        let board: Board = "XXX OOO ___".parse().unwrap();
        assert_eq!(evaluate(&board), Err(EngineError::MultipleWinners));
    }

    #[test]
    fn test_full_board_tie() {
        let board: Board = "OXO XOX XOX".parse().unwrap();
        assert_eq!(evaluate(&board).unwrap().outcome(), Outcome::Tie);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board: Board = "XO_ _X_ O__".parse().unwrap();
        assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Mark::O).to_string(), "O");
        assert_eq!(Outcome::Tie.to_string(), "TIE");
    }
}
