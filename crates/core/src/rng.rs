//! RNG module - injectable random sources for the spawn policy
//!
//! Every random decision the simulation makes (spawn rolls, spawn positions,
//! extents and kinds) goes through [`RandomSource`]. Two sources ship with
//! the crate:
//!
//! - [`SimpleRng`]: a seedable LCG, the default for real play
//! - [`SequenceRng`]: replays a fixed list of draws, for golden tests

/// A source of random draws.
///
/// Only [`next_u32`](RandomSource::next_u32) is required; the other methods
/// derive from it. The trait is object-safe, so hosts may also hold a
/// `Box<dyn RandomSource>`.
pub trait RandomSource {
    /// Next raw 32-bit draw
    fn next_u32(&mut self) -> u32;

    /// Uniform sample in `[0, 1)`
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Uniform integer in `[lo, hi]`. Returns `lo` when the range is empty.
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi as i64 - lo as i64 + 1) as u64;
        // Multiply-high keeps the LCG's weak low bits out of the result.
        let offset = (self.next_u32() as u64 * span) >> 32;
        (lo as i64 + offset as i64) as i32
    }

    /// Uniform index into a collection of `len` items
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.range_inclusive(0, (len - 1) as i32) as usize
    }

    /// Bernoulli trial succeeding with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).range_inclusive(lo, hi)
    }

    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn chance(&mut self, p: f64) -> bool {
        (**self).chance(p)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current generator state; `SimpleRng::new(state)` resumes the stream.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
///
/// Each stored value is consumed by exactly one draw:
///
/// - [`next_f64`](RandomSource::next_f64) / [`chance`](RandomSource::chance)
///   read it as a unit sample (`0.0` always passes a spawn roll, `1.0` never does)
/// - [`range_inclusive`](RandomSource::range_inclusive) /
///   [`index`](RandomSource::index) read it as the literal result, clamped
///   into the requested range
///
/// ```
/// use speedway_core::{RandomSource, SequenceRng};
///
/// let mut rng = SequenceRng::new(vec![0.0, 200.0, 1.0]);
/// assert!(rng.chance(0.02));
/// assert_eq!(rng.range_inclusive(50, 350), 200);
/// assert!(!rng.chance(0.02));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRng {
    draws: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// A source whose spawn rolls always fail.
    pub fn never() -> Self {
        Self::new(vec![1.0])
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    fn next_value(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 1.0;
        }
        let v = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        v
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_value().clamp(0.0, 1.0) * u32::MAX as f64) as u32
    }

    fn next_f64(&mut self) -> f64 {
        self.next_value()
    }

    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        let v = self.next_value().round() as i32;
        if hi <= lo {
            return lo;
        }
        v.clamp(lo, hi)
    }
}
