//! Random number sources.
//!
//! Password construction only ever needs a uniform index into an alphabet, so
//! that is the whole capability. Production code wraps a `rand` generator; tests
//! inject seeded or scripted sources.

use rand::Rng;
use rand::rngs::ThreadRng;

pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn index(&mut self, bound: usize) -> usize;
}

/// Adapter from any `rand` generator.
pub struct RngSource<R>(R);

impl RngSource<ThreadRng> {
    /// Thread-local generator, seeded from the OS.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Replays a fixed list of draws, each reduced modulo the requested bound.
#[cfg(test)]
pub struct Scripted {
    draws: Vec<usize>,
    pos: usize,
    pub bounds: Vec<usize>,
}

#[cfg(test)]
impl Scripted {
    pub fn new(draws: &[usize]) -> Self {
        Scripted {
            draws: draws.to_vec(),
            pos: 0,
            bounds: Vec::new(),
        }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn index(&mut self, bound: usize) -> usize {
        let draw = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        self.bounds.push(bound);
        draw % bound
    }
}
