//! Randomness used by the simulation.
//!
//! Every random draw goes through [`Entropy`] so runs can be seeded for
//! reproducibility or replaced with fixed values in tests.

use rand::prelude::*;

/// Upper bound (exclusive) of the random step applied by source strengthen/weaken
pub const SOURCE_STEP_BOUND: u8 = 14;

/// Scale applied to a unit draw before truncating it to a decay value
const DECAY_SCALE: f64 = 1.3;

/// Source of random draws for the fire simulation
pub trait Entropy {
    /// Uniform draw in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`
    fn below(&mut self, bound: u8) -> u8;

    /// Heat lost while rising one row: 0 about 23 times in 30, otherwise 1
    fn decay(&mut self) -> u8 {
        (self.unit() * DECAY_SCALE).floor() as u8
    }

    /// Random step applied to a source cell by strengthen/weaken
    fn source_step(&mut self) -> u8 {
        self.below(SOURCE_STEP_BOUND)
    }
}

/// [`Entropy`] backed by `StdRng`
pub struct SeededEntropy {
    rng: StdRng,
}

impl SeededEntropy {
    /// Reproducible stream: equal seeds give equal runs
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Seeded when `seed` is given, OS entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl Entropy for SeededEntropy {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn below(&mut self, bound: u8) -> u8 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}
