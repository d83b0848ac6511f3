//! Randomness Port
//!
//! Every random draw in the core (profile fields, match outcome, reply text
//! and delay) goes through this trait so tests can substitute a
//! deterministic or scripted source.

/// Source of randomness
///
/// # Example
///
/// ```rust,ignore
/// use neon_orbit::ports::RandomSource;
///
/// struct AlwaysFirst;
///
/// impl RandomSource for AlwaysFirst {
///     fn index(&mut self, _len: usize) -> usize { 0 }
///     fn int_in(&mut self, lo: u32, _hi: u32) -> u32 { lo }
///     fn chance(&mut self, _probability: f64) -> bool { true }
///     fn bytes16(&mut self) -> [u8; 16] { [0; 16] }
/// }
/// ```
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `lo..=hi`
    fn int_in(&mut self, lo: u32, hi: u32) -> u32;

    /// Bernoulli trial succeeding with `probability`
    fn chance(&mut self, probability: f64) -> bool;

    /// Sixteen random bytes, used for identifiers
    fn bytes16(&mut self) -> [u8; 16];

    /// Pick one element uniformly
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &items[self.index(items.len())]
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        (**self).int_in(lo, hi)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }

    fn bytes16(&mut self) -> [u8; 16] {
        (**self).bytes16()
    }
}
