// src/stocks/definitions.rs
//! Catalog of tracked securities.
//
//! The default universe is the five tickers shown on the display page.
//! Extend `default_catalog()` (or pass a custom `StoreConfig`) to track more.

pub type Symbol = String;

use crate::errors::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Immutable facts about a tracked company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Display label (e.g. "苹果").
    pub name: String,
    /// Unique ticker (e.g. "AAPL").
    pub symbol: Symbol,
}

/// Convenience factory so call-sites stay concise.
impl Stock {
    #[inline]
    pub fn new<T1: Into<String>, T2: Into<String>>(name: T1, symbol: T2) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// The chart legend for this stock, e.g. "谷歌 (GOOGL)".
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

/// The stocks shown when the page boots, in display order.
#[inline]
pub fn default_catalog() -> Vec<Stock> {
    vec![
        Stock::new("苹果", "AAPL"),
        Stock::new("谷歌", "GOOGL"),
        Stock::new("微软", "MSFT"),
        Stock::new("亚马逊", "AMZN"),
        Stock::new("Facebook", "META"),
    ]
}

/// Ordered, symbol-unique list of stocks with a ticker index for lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    stocks: Vec<Stock>,
    /// ticker -> position in `stocks`
    index: HashMap<Symbol, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty input and repeated symbols.
    pub fn new(stocks: Vec<Stock>) -> Result<Self> {
        if stocks.is_empty() {
            return Err(StoreError::EmptyCatalog);
        }
        let mut index = HashMap::with_capacity(stocks.len());
        for (pos, s) in stocks.iter().enumerate() {
            if index.insert(s.symbol.clone(), pos).is_some() {
                return Err(StoreError::DuplicateSymbol(s.symbol.clone()));
            }
        }
        Ok(Self { stocks, index })
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    /// Never empty, so there is always a first entry.
    pub fn first(&self) -> &Stock {
        &self.stocks[0]
    }

    pub fn get(&self, symbol: &str) -> Option<&Stock> {
        self.index.get(symbol).map(|&pos| &self.stocks[pos])
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

/// Returns the first symbol that appears more than once, if any.
pub fn find_duplicate_symbol<'a, I>(symbols: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    symbols.into_iter().find(|s| !seen.insert(*s))
}
