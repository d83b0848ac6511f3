//! Test doubles shared by unit tests

use crate::adapters::{DefaultRandom, RngSource};
use crate::ports::RandomSource;

/// Seeded source whose Bernoulli draws and id bytes can be pinned
pub struct ScriptedRandom {
    inner: DefaultRandom,
    forced_chance: Option<bool>,
    fixed_bytes: Option<[u8; 16]>,
    bytes_drawn: usize,
}

impl ScriptedRandom {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: RngSource::seeded(seed),
            forced_chance: None,
            fixed_bytes: None,
            bytes_drawn: 0,
        }
    }

    /// Every `chance` call returns `outcome`
    pub fn with_forced_chance(mut self, outcome: bool) -> Self {
        self.forced_chance = Some(outcome);
        self
    }

    /// Every identifier draw returns `bytes`
    pub fn with_fixed_bytes(mut self, bytes: [u8; 16]) -> Self {
        self.fixed_bytes = Some(bytes);
        self
    }

    pub fn bytes_drawn(&self) -> usize {
        self.bytes_drawn
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, len: usize) -> usize {
        self.inner.index(len)
    }

    fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        self.inner.int_in(lo, hi)
    }

    fn chance(&mut self, probability: f64) -> bool {
        match self.forced_chance {
            Some(outcome) => outcome,
            None => self.inner.chance(probability),
        }
    }

    fn bytes16(&mut self) -> [u8; 16] {
        self.bytes_drawn += 1;
        match self.fixed_bytes {
            Some(bytes) => bytes,
            None => self.inner.bytes16(),
        }
    }
}
