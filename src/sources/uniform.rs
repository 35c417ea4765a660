// src/sources/uniform.rs

use super::source_trait::SeriesSource;
use crate::errors::{Result, StoreError};
use crate::stocks::Stock;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Mock price generator: every point is drawn uniformly from `[min, max]`.
pub struct UniformSource<R: Rng = ThreadRng> {
    dist: Uniform<u32>,
    rng: R,
}

impl UniformSource<ThreadRng> {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        Self::with_rng(min, max, rand::thread_rng())
    }
}

impl UniformSource<StdRng> {
    /// Reproducible source, for tests and benches.
    pub fn seeded(min: u32, max: u32, seed: u64) -> Result<Self> {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UniformSource<R> {
    pub fn with_rng(min: u32, max: u32, rng: R) -> Result<Self> {
        // Uniform::new_inclusive panics on an inverted range.
        if min > max {
            return Err(StoreError::InvalidRange { min, max });
        }
        Ok(Self {
            dist: Uniform::new_inclusive(min, max),
            rng,
        })
    }
}

impl<R: Rng> SeriesSource for UniformSource<R> {
    fn generate(&mut self, _stock: &Stock, points: usize) -> Vec<u32> {
        (0..points).map(|_| self.dist.sample(&mut self.rng)).collect()
    }
}
