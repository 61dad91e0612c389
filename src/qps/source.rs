//! Random sources feeding the QPS generator

use rand::prelude::*;
use rand_distr::{Distribution, Uniform};

/// Uniform randomness consumed by the generator
///
/// Implementations only need two primitives: a uniform draw over a half-open
/// range and a biased coin flip. Swapping the source is how tests pin the
/// noise and burst factors.
pub trait RandomSource {
    /// Draw uniformly from `[low, high)`. Degenerate ranges yield `low`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Return `true` with probability `p`
    fn probability(&mut self, p: f64) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }

    fn probability(&mut self, p: f64) -> bool {
        (**self).probability(p)
    }
}

/// Source backed by a standard PRNG
#[derive(Debug, Clone)]
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    /// Create a new source with random seed
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a source with a fixed seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for RngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for RngSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        Uniform::new(low, high).sample(&mut self.rng)
    }

    fn probability(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }
}

/// Deterministic source: every draw is the range midpoint and no event fires
///
/// With this source the noise factor is exactly 1.0 and bursts never happen,
/// which leaves only the diurnal shape and the smoothing in the signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointSource;

impl RandomSource for MidpointSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }

    fn probability(&mut self, _p: f64) -> bool {
        false
    }
}
