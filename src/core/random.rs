//! Injectable sources of uniform random draws for the selector.

use rand::Rng;

/// A source of uniform draws in `[0, 1)`.
///
/// The selector only ever asks for unit draws and scales them itself, which keeps every
/// selection path reproducible once the sequence of draws is fixed. Values outside
/// `[0, 1)` are used as given.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<rand::rngs::ThreadRng> {
    /// Thread-local generator seeded from the OS
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<rand::rngs::StdRng> {
    /// Deterministic generator for reproducible draws
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// An empty sequence always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// A source that returns `value` on every draw
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

/// Map a unit draw onto an index in `0..len`.
///
/// Out-of-range and NaN draws are clamped so the result is always a valid index.
/// `len` must be non-zero.
#[inline]
pub fn unit_to_index(draw: f64, len: usize) -> usize {
    debug_assert!(len > 0);
    let scaled = (draw * len as f64).floor();
    if scaled.is_nan() || scaled < 0.0 {
        0
    } else {
        // `as usize` saturates for huge values
        (scaled as usize).min(len - 1)
    }
}
