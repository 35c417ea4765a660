// src/sources/source_trait.rs

use crate::stocks::Stock;

/// A trait for anything that can supply the price points of a series.
/// This keeps the store independent of where the numbers come from, so a
/// real feed can replace the mock generator.
pub trait SeriesSource {
    /// Produces exactly `points` values for `stock`.
    fn generate(&mut self, stock: &Stock, points: usize) -> Vec<u32>;
}
