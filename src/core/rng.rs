//! Random number source for combat rolls and monster selection.
//!
//! The game only ever asks for "an integer in an inclusive range", so that is
//! the whole interface. `GameRng` is the real source; tests plug in scripted
//! implementations of [`Dice`] to force particular outcomes.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed integers.
pub trait Dice {
    /// Returns an integer in `[min, max]`, both inclusive.
    ///
    /// Callers must guarantee `min <= max`.
    fn roll(&mut self, min: i32, max: i32) -> i32;
}

/// Seeded generator owned by the game loop.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Seeds from the wall clock. Each process should do this once.
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .map_or_else(|| now.timestamp() as u64, |nanos| nanos as u64);
        Self::from_seed(seed)
    }

    /// Seeds deterministically, for reproducible games and simulations.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        // First draw after seeding is thrown away
        let _ = rng.next_u32();
        Self { rng, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Dice for GameRng {
    fn roll(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "roll({min}, {max}) has an empty range");
        self.rng.gen_range(min..=max)
    }
}
