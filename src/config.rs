// src/config.rs

//! A centralized place for the store's fixture parameters.

use crate::errors::{Result, StoreError};
use crate::stocks::definitions::{Stock, default_catalog, find_duplicate_symbol};
use serde::{Deserialize, Serialize};
use std::path::Path;

// --- Series shape ---
pub const SERIES_POINTS: usize = 7;
pub const MONTH_LABELS: [&str; SERIES_POINTS] =
    ["一月", "二月", "三月", "四月", "五月", "六月", "七月"];

// --- Mock price range (inclusive) ---
pub const MIN_PRICE: u32 = 40;
pub const MAX_PRICE: u32 = 100;

// --- Chart styling ---
pub const DEFAULT_TENSION: f64 = 0.1;
// One color per default catalog entry, same order as `default_catalog()`.
pub const DEFAULT_PALETTE: [&str; 5] = ["#007bff", "#28a745", "#dc3545", "#ffc107", "#17a2b8"];

/// A catalog entry together with the color its dataset is drawn in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub symbol: String,
    pub color: String,
}

impl CatalogEntry {
    pub fn new(name: &str, symbol: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            color: color.to_string(),
        }
    }

    pub fn stock(&self) -> Stock {
        Stock::new(self.name.clone(), self.symbol.clone())
    }
}

/// Everything needed to build a `StockStore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub stocks: Vec<CatalogEntry>,
    pub labels: Vec<String>,
    pub min_price: u32,
    pub max_price: u32,
    pub tension: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let stocks = default_catalog()
            .into_iter()
            .zip(DEFAULT_PALETTE)
            .map(|(s, color)| CatalogEntry {
                name: s.name,
                symbol: s.symbol,
                color: color.to_string(),
            })
            .collect();
        Self {
            stocks,
            labels: MONTH_LABELS.iter().map(|l| l.to_string()).collect(),
            min_price: MIN_PRICE,
            max_price: MAX_PRICE,
            tension: DEFAULT_TENSION,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, min_price: u32, max_price: u32) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a stock to the end of the catalog.
    pub fn with_stock(mut self, name: &str, symbol: &str, color: &str) -> Self {
        self.stocks.push(CatalogEntry::new(name, symbol, color));
        self
    }

    /// Number of data points generated per series; one per label.
    pub fn points(&self) -> usize {
        self.labels.len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.stocks.is_empty() {
            return Err(StoreError::EmptyCatalog);
        }
        if let Some(dup) = find_duplicate_symbol(self.stocks.iter().map(|e| e.symbol.as_str())) {
            return Err(StoreError::DuplicateSymbol(dup.to_string()));
        }
        if self.min_price > self.max_price {
            return Err(StoreError::InvalidRange {
                min: self.min_price,
                max: self.max_price,
            });
        }
        if self.labels.is_empty() {
            return Err(StoreError::EmptyLabels);
        }
        Ok(())
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_page_fixture() {
        let cfg = StoreConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.points(), 7);
        assert_eq!(cfg.stocks[0], CatalogEntry::new("苹果", "AAPL", "#007bff"));
        assert_eq!(cfg.stocks[4], CatalogEntry::new("Facebook", "META", "#17a2b8"));
        assert_eq!((cfg.min_price, cfg.max_price), (40, 100));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg = StoreConfig::from_json_str(r#"{ "min_price": 10, "max_price": 20 }"#).unwrap();
        assert_eq!(cfg.min_price, 10);
        assert_eq!(cfg.stocks.len(), 5);
        assert_eq!(cfg.tension, DEFAULT_TENSION);
    }

    #[test]
    fn json_with_custom_catalog() {
        let raw = r##"{
            "stocks": [{ "name": "特斯拉", "symbol": "TSLA", "color": "#e31937" }],
            "labels": ["Q1", "Q2"]
        }"##;
        let cfg = StoreConfig::from_json_str(raw).unwrap();
        assert_eq!(cfg.stocks.len(), 1);
        assert_eq!(cfg.stocks[0].stock(), Stock::new("特斯拉", "TSLA"));
        assert_eq!(cfg.points(), 2);
    }

    #[test]
    fn validate_rejects_bad_input() {
        let inverted = StoreConfig::new().with_range(90, 10);
        assert!(matches!(
            inverted.validate(),
            Err(StoreError::InvalidRange { min: 90, max: 10 })
        ));

        let dup = StoreConfig::new().with_stock("Apple again", "AAPL", "#000000");
        assert!(matches!(dup.validate(), Err(StoreError::DuplicateSymbol(s)) if s == "AAPL"));

        let empty: Vec<String> = vec![];
        let no_labels = StoreConfig::new().with_labels(empty);
        assert!(matches!(no_labels.validate(), Err(StoreError::EmptyLabels)));

        assert!(StoreConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = StoreConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, StoreError::IoError(_)));
    }
}
