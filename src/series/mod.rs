// src/series/mod.rs
pub mod chart;

pub use chart::{Dataset, TimeSeries};
