//! The game loop.

use crate::error::EngineError;
use crate::players::MoveSource;
use crate::rules::{Outcome, evaluate};
use crate::types::{Board, Mark};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{error, info, instrument};

/// A finished game: how it ended, the final board and every move in order.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameRecord {
    /// Winner or tie.
    outcome: Outcome,
    /// Board after the last move.
    board: Board,
    /// Cells played, X first, strictly alternating.
    history: Vec<usize>,
}

/// Plays one game to completion, X moving first.
///
/// The board is owned here; sources only ever see it by shared reference.
/// The terminal state is re-evaluated before every move request, so a source
/// is never asked to move on a finished board.
///
/// # Errors
///
/// - [`EngineError::IllegalMove`] if a source picks an out-of-range or occupied cell.
/// - [`EngineError::MultipleWinners`] if the board ever shows two winners.
/// - Any error a source returns from [`MoveSource::next_move`].
#[instrument(skip_all, fields(x = %player_x.name(), o = %player_o.name()))]
pub fn play_game(
    player_x: &mut dyn MoveSource,
    player_o: &mut dyn MoveSource,
) -> Result<GameRecord, EngineError> {
    info!("Starting game");

    let mut board = Board::new();
    let mut history = Vec::new();
    let mut to_move = Mark::X;

    let outcome = loop {
        let evaluation = evaluate(&board)?;
        if evaluation.is_over() {
            break evaluation.outcome();
        }

        let player: &mut dyn MoveSource = match to_move {
            Mark::X => &mut *player_x,
            Mark::O => &mut *player_o,
        };

        let cell = player.next_move(&board, to_move)?;
        if !board.is_empty(cell) {
            error!(player = %player.name(), mark = %to_move, cell, "Illegal move");
            return Err(EngineError::IllegalMove {
                mark: to_move,
                cell,
                board,
                history,
            });
        }

        board.place(cell, to_move);
        history.push(cell);
        info!(player = %player.name(), mark = %to_move, cell, "Move made");

        to_move = to_move.opponent();
    };

    info!(%outcome, moves = history.len(), "Game over");
    Ok(GameRecord {
        outcome,
        board,
        history,
    })
}
