//! Uniformly random move selection, the "easy" computer player.

use super::super::{Board, Move};
use super::MoveSelector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks any empty cell with equal probability.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Creates a selector seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a selector with a fixed seed, for reproducible games.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board) -> Option<Move> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return None;
        }
        let pick = moves[self.rng.random_range(0..moves.len())];
        debug!(%pick, choices = moves.len(), "Picked random move");
        Some(pick)
    }
}
