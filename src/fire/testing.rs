//! Deterministic entropy sources for unit tests

use super::entropy::Entropy;
use std::collections::VecDeque;

/// Returns the same values for every draw
pub struct FixedEntropy {
    unit: f64,
    step: u8,
    pub below_calls: usize,
}

impl FixedEntropy {
    pub fn new(unit: f64, step: u8) -> Self {
        Self { unit, step, below_calls: 0 }
    }
}

impl Entropy for FixedEntropy {
    fn unit(&mut self) -> f64 {
        self.unit
    }

    fn below(&mut self, bound: u8) -> u8 {
        self.below_calls += 1;
        self.step.min(bound.saturating_sub(1))
    }
}

/// Plays back a fixed list of decay values, then zeros
pub struct ScriptedEntropy {
    decays: VecDeque<u8>,
}

impl ScriptedEntropy {
    pub fn decays(decays: &[u8]) -> Self {
        Self { decays: decays.iter().copied().collect() }
    }
}

impl Entropy for ScriptedEntropy {
    fn unit(&mut self) -> f64 {
        0.0
    }

    fn below(&mut self, _bound: u8) -> u8 {
        0
    }

    fn decay(&mut self) -> u8 {
        self.decays.pop_front().unwrap_or(0)
    }
}
