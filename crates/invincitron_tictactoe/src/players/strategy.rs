//! Player backed by the rule cascade.

use super::MoveSource;
use crate::error::EngineError;
use crate::strategy::suggest;
use crate::types::{Board, Mark};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Plays the highest-priority rule that applies.
#[derive(Debug, Clone)]
pub struct StrategyPlayer {
    name: String,
    rng: StdRng,
    seed: u64,
}

impl StrategyPlayer {
    /// Creates a strategy player with a fresh random seed.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, rand::rng().random())
    }

    /// Creates a strategy player whose random tie-breaks replay from `seed`.
    #[instrument(skip(name))]
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed driving the corner and side tie-breaks.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MoveSource for StrategyPlayer {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<usize, EngineError> {
        let suggestion =
            suggest(board, mark, &mut self.rng).ok_or(EngineError::NoLegalMove { mark })?;
        debug!(cell = suggestion.cell(), rule = %suggestion.rule(), "Strategy chose position");
        Ok(suggestion.cell())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_is_center() {
        let mut player = StrategyPlayer::with_seed("engine", 1);
        assert_eq!(player.next_move(&Board::new(), Mark::X), Ok(4));
    }

    #[test]
    fn test_full_board_is_no_legal_move() {
        let board: Board = "OXO XOX XOX".parse().unwrap();
        let mut player = StrategyPlayer::with_seed("engine", 1);
        assert_eq!(
            player.next_move(&board, Mark::O),
            Err(EngineError::NoLegalMove { mark: Mark::O })
        );
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(StrategyPlayer::with_seed("engine", 42).seed(), 42);
    }
}
