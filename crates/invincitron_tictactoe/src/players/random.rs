//! Player that picks any free cell.

use super::MoveSource;
use crate::error::EngineError;
use crate::types::{Board, Mark};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks uniformly among unmarked cells. Useful as a sparring partner.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player with a fresh random seed.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, rand::rng().random())
    }

    /// Creates a random player that replays from `seed`.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomPlayer {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<usize, EngineError> {
        let free: Vec<usize> = board.empty_cells().collect();
        let cell = free
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoLegalMove { mark })?;
        debug!(cell, "Random player chose position");
        Ok(cell)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
