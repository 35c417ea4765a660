// src/sources/replay.rs

use super::source_trait::SeriesSource;
use crate::stocks::{Stock, Symbol};
use std::collections::HashMap;

/// Serves pre-recorded points per symbol. Symbols without a recording, or
/// recordings shorter than requested, are padded with `fill`.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    recordings: HashMap<Symbol, Vec<u32>>,
    fill: u32,
}

impl ReplaySource {
    pub fn new(fill: u32) -> Self {
        Self {
            recordings: HashMap::new(),
            fill,
        }
    }

    pub fn with_recording<S: Into<Symbol>>(mut self, symbol: S, data: Vec<u32>) -> Self {
        self.recordings.insert(symbol.into(), data);
        self
    }
}

impl SeriesSource for ReplaySource {
    fn generate(&mut self, stock: &Stock, points: usize) -> Vec<u32> {
        let recorded = self
            .recordings
            .get(&stock.symbol)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        (0..points)
            .map(|i| recorded.get(i).copied().unwrap_or(self.fill))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_truncates_and_pads() {
        let mut src = ReplaySource::new(50)
            .with_recording("AAPL", vec![1, 2, 3])
            .with_recording("MSFT", vec![9; 10]);
        assert_eq!(src.generate(&Stock::new("苹果", "AAPL"), 5), vec![1, 2, 3, 50, 50]);
        assert_eq!(src.generate(&Stock::new("微软", "MSFT"), 2), vec![9, 9]);
        assert_eq!(src.generate(&Stock::new("谷歌", "GOOGL"), 2), vec![50, 50]);
    }
}
