//! The deterministic simulation RNG.
//!
//! Every random decision in the logic flows through [`LogicRandom`] so a
//! saved game can restore the generator to the exact stream position: the
//! snapshot is the seed plus a draw counter, and loading replays that many
//! draws from a fresh generator. Each draw consumes exactly one generator
//! word, which is what makes the replay exact.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use rampart_core::xfer::{Snapshot, Xfer, XferResult};

/// A seeded, draw-counted random number generator.
pub struct LogicRandom {
    rng: StdRng,
    seed: u64,
    draws: u64,
}

impl std::fmt::Debug for LogicRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogicRandom")
            .field("seed", &self.seed)
            .field("draws", &self.draws)
            .finish()
    }
}

impl LogicRandom {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            draws: 0,
        }
    }

    /// The seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// How many values have been drawn since seeding.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Draw a value in `lo..=hi`. The slight modulo bias is irrelevant for
    /// phase offsets and lifetimes; what matters is that one call consumes
    /// exactly one generator word.
    pub fn random_range(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        let word = self.next_word();
        let span = hi.wrapping_sub(lo).wrapping_add(1);
        if span == 0 {
            // lo == 0 && hi == u32::MAX: the word already spans the range.
            return word;
        }
        lo + word % span
    }

    fn next_word(&mut self) -> u32 {
        self.draws += 1;
        self.rng.next_u32()
    }
}

impl Snapshot for LogicRandom {
    fn xfer(&mut self, xfer: &mut dyn Xfer) -> XferResult<()> {
        xfer.xfer_u64(&mut self.seed)?;
        xfer.xfer_u64(&mut self.draws)?;
        if xfer.mode() == rampart_core::XferMode::Load {
            // Restore the stream position by replaying the counted draws.
            self.rng = StdRng::seed_from_u64(self.seed);
            for _ in 0..self.draws {
                let _unused = self.rng.next_u32();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rampart_core::xfer::{XferLoad, XferSave};

    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = LogicRandom::new(99);
        let mut b = LogicRandom::new(99);
        for _ in 0..32 {
            assert_eq!(a.random_range(0, 1000), b.random_range(0, 1000));
        }
        assert_eq!(a.draws(), 32);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut rng = LogicRandom::new(7);
        for _ in 0..256 {
            let value = rng.random_range(3, 5);
            assert!((3..=5).contains(&value));
        }
        assert_eq!(rng.random_range(9, 9), 9);
    }

    #[test]
    fn restored_generator_continues_the_stream() {
        let mut original = LogicRandom::new(42);
        for _ in 0..10 {
            original.random_range(0, 100);
        }

        let mut save = XferSave::new();
        original.xfer(&mut save).unwrap();

        let mut restored = LogicRandom::new(0);
        let mut load = XferLoad::new(save.into_data());
        restored.xfer(&mut load).unwrap();

        assert_eq!(restored.seed(), 42);
        assert_eq!(restored.draws(), 10);
        for _ in 0..32 {
            assert_eq!(
                original.random_range(0, 1_000_000),
                restored.random_range(0, 1_000_000)
            );
        }
    }
}
