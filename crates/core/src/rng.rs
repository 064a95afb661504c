use crate::Move;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw over the three moves, independent each round.
    pub fn draw_move(&mut self) -> Move {
        *Move::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Move::Rock)
    }
}
