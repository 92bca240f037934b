//! Seedable random number generation for board and sequence setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards and sequences
//! - **Clock seeding**: `from_clock` mirrors seeding from the wall clock at
//!   startup, so every process run gets a fresh game
//! - **Reseedable**: a live generator can be reseeded in place
//!
//! ```
//! use memory_game::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.roll(1..=9), b.roll(1..=9));
//! ```

use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG shared by board setup and sequence generation.
///
/// Uses ChaCha8 so that a recorded seed reproduces a whole game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the wall clock (whole seconds).
    #[must_use]
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// Reseed in place from the wall clock.
    pub fn reseed_from_clock(&mut self) {
        *self = Self::from_clock();
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a value uniformly from an inclusive range.
    pub fn roll(&mut self, range: RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(1..=9), rng2.roll(1..=9));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll(0..=255)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll(0..=255)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = GameRng::new(7);

        for _ in 0..1000 {
            let value = rng.roll(1..=9);
            assert!((1..=9).contains(&value));
        }
    }

    #[test]
    fn test_roll_covers_both_bounds() {
        let mut rng = GameRng::new(7);
        let values: Vec<_> = (0..1000).map(|_| rng.roll(1..=9)).collect();

        assert!(values.contains(&1));
        assert!(values.contains(&9));
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_seed_is_recorded() {
        assert_eq!(GameRng::new(1234).seed(), 1234);
    }

    #[test]
    fn test_reseed_from_clock() {
        let mut rng = GameRng::new(0);
        rng.reseed_from_clock();

        // Any clock after 2001 is well past one billion seconds.
        assert!(rng.seed() > 1_000_000_000);
    }
}
