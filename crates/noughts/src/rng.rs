//! Seedable random source for move selection.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Random source owned by a game session.
///
/// Keeps its seed so a game can be replayed exactly. Implements [`RngCore`],
/// so it can be passed anywhere a [`rand::Rng`] is expected.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    /// Creates a generator from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a fresh random seed.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// The seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for SessionRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);
        let xs: Vec<u32> = (0..8).map(|_| a.random_range(0..9)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.random_range(0..9)).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 42);
    }
}
