//! Random player that picks uniformly among all labels until one sticks.

use crate::board::Gameboard;
use crate::types::Mark;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Player that samples labels uniformly from `0..=max_index`.
///
/// Occupied samples are simply drawn again, so the expected number of draws
/// is `cells / open cells`.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    mark: Mark,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player driven by `rng`.
    pub fn with_rng(mark: Mark, rng: StdRng) -> Self {
        Self { mark, rng }
    }

    /// Creates a reproducible random player.
    #[instrument]
    pub fn seeded(mark: Mark, seed: u64) -> Self {
        Self::with_rng(mark, StdRng::seed_from_u64(seed))
    }

    /// Creates a random player seeded by the operating system.
    #[instrument]
    pub fn from_os_rng(mark: Mark) -> Self {
        Self::with_rng(mark, StdRng::from_os_rng())
    }

    /// Returns this player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Places one mark on a random open cell.
    ///
    /// Does nothing if the board has no open cell.
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    pub fn decide_move(&mut self, board: &mut Gameboard) {
        if !board.has_open_cell() {
            debug!("No open cell, skipping turn");
            return;
        }

        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let label = self.rng.random_range(0..=board.max_index());
            if board.apply_move(label, self.mark) {
                debug!(label, attempts, "Random move placed");
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardSize;

    #[test]
    fn test_same_seed_same_move() {
        let mut first = Gameboard::new(BoardSize::new(5).unwrap());
        let mut second = first.clone();
        RandomPlayer::seeded(Mark::X, 42).decide_move(&mut first);
        RandomPlayer::seeded(Mark::X, 42).decide_move(&mut second);
        assert_eq!(first, second);
        assert_eq!(first.open_labels().count(), 24);
    }
}
