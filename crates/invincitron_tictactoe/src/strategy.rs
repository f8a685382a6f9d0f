//! Rule cascade for choosing the next move.
//!
//! Rules are tried in priority order and the first one that names a cell
//! decides the move:
//!
//! 1. Win: complete one of our own two-in-a-rows.
//! 2. Block: complete the opponent's two-in-a-row before they can.
//! 3. Fork: create two winning threats at once (not implemented).
//! 4. Block fork: deny the opponent a fork (not implemented).
//! 5. Center.
//! 6. Opposite corner: answer an opponent corner with the corner across from it.
//! 7. Empty corner, chosen at random.
//! 8. Empty side, chosen at random.
//!
//! The random choices draw from a caller-supplied [`Rng`] so games can be
//! replayed from a seed.

use crate::threats::{can_block, find_completing_move};
use crate::types::{Board, CENTER, CORNERS, Mark, SIDES};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// A single heuristic in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Rule {
    /// Complete our own triple.
    Win,
    /// Complete the opponent's triple first.
    Block,
    /// Create two threats at once.
    Fork,
    /// Stop the opponent from forking.
    BlockFork,
    /// Take the center.
    Center,
    /// Take the corner opposite an opponent corner.
    OppositeCorner,
    /// Take any free corner.
    EmptyCorner,
    /// Take any free side.
    EmptySide,
}

/// What a rule said about the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleOutcome {
    /// The rule picked this cell.
    Move(usize),
    /// The rule does not apply here.
    NoMove,
    /// The rule has no implementation yet and never picks a cell.
    NotImplemented,
}

impl From<Option<usize>> for RuleOutcome {
    fn from(cell: Option<usize>) -> Self {
        cell.map_or(RuleOutcome::NoMove, RuleOutcome::Move)
    }
}

impl Rule {
    /// Rules in the order they are consulted.
    pub const CASCADE: [Rule; 8] = [
        Rule::Win,
        Rule::Block,
        Rule::Fork,
        Rule::BlockFork,
        Rule::Center,
        Rule::OppositeCorner,
        Rule::EmptyCorner,
        Rule::EmptySide,
    ];

    /// Applies this rule alone to the board.
    pub fn apply<R: Rng + ?Sized>(self, board: &Board, mark: Mark, rng: &mut R) -> RuleOutcome {
        match self {
            Rule::Win => find_completing_move(board, mark).into(),
            Rule::Block => can_block(board, mark).into(),
            Rule::Fork | Rule::BlockFork => RuleOutcome::NotImplemented,
            Rule::Center => center(board).into(),
            Rule::OppositeCorner => opposite_corner(board, mark).into(),
            Rule::EmptyCorner => random_free(board, &CORNERS, rng).into(),
            Rule::EmptySide => random_free(board, &SIDES, rng).into(),
        }
    }
}

/// A chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    cell: usize,
    rule: Rule,
}

impl Suggestion {
    /// The chosen cell (0-8).
    pub fn cell(&self) -> usize {
        self.cell
    }

    /// The rule that produced the cell.
    pub fn rule(&self) -> Rule {
        self.rule
    }
}

/// Runs the cascade and reports which rule decided.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn suggest<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<Suggestion> {
    for rule in Rule::CASCADE {
        match rule.apply(board, mark, rng) {
            RuleOutcome::Move(cell) => {
                debug!(%rule, cell, "Rule chose move");
                return Some(Suggestion { cell, rule });
            }
            RuleOutcome::NotImplemented => trace!(%rule, "Rule not implemented, skipping"),
            RuleOutcome::NoMove => trace!(%rule, "Rule does not apply"),
        }
    }

    debug!("No rule applies, board is full");
    None
}

/// The best next cell for `mark`, or `None` on a full board.
pub fn suggest_move<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<usize> {
    suggest(board, mark, rng).map(|suggestion| suggestion.cell())
}

fn center(board: &Board) -> Option<usize> {
    board.is_empty(CENTER).then_some(CENTER)
}

// Corners are visited in ascending order: 0, 2, 6, 8.
fn opposite_corner(board: &Board, mark: Mark) -> Option<usize> {
    CORNERS
        .iter()
        .find(|&&(corner, opposite)| {
            board.is_empty(corner) && board.holds(opposite, mark.opponent())
        })
        .map(|&(corner, _)| corner)
}

fn random_free<R: Rng + ?Sized>(
    board: &Board,
    cells: &[(usize, usize)],
    rng: &mut R,
) -> Option<usize> {
    let free: Vec<usize> = cells
        .iter()
        .map(|&(cell, _)| cell)
        .filter(|&cell| board.is_empty(cell))
        .collect();
    free.choose(rng).copied()
}
