// src/store.rs

use crate::config::StoreConfig;
use crate::errors::{Result, StoreError};
use crate::series::TimeSeries;
use crate::sources::source_trait::SeriesSource;
use crate::sources::uniform::UniformSource;
use crate::stocks::{Catalog, Stock, Symbol};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashMap;

/// Delivered to listeners whenever the selected symbol actually changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Symbol,
    pub current: Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&SelectionChange) + Send + Sync>;

/// UI state for the stock display page: the catalog, the per-symbol series
/// and the one mutable field, the selected symbol.
///
/// Series are generated once here and never touched again.
pub struct StockStore {
    catalog: Catalog,
    series: HashMap<Symbol, TimeSeries>,
    selected_symbol: Symbol,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

/// Serializable view of the whole state, shaped like the page's store.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot<'a> {
    pub stocks: &'a [Stock],
    pub selected_symbol: &'a str,
    pub stock_data: &'a HashMap<Symbol, TimeSeries>,
}

impl StockStore {
    /// Default catalog with freshly drawn mock prices.
    pub fn new() -> Self {
        Self::from_config(StoreConfig::default()).expect("default config is valid")
    }

    /// Mock prices drawn uniformly from the config's `[min_price, max_price]`.
    pub fn from_config(config: StoreConfig) -> Result<Self> {
        let mut source = UniformSource::new(config.min_price, config.max_price)?;
        Self::with_source(config, &mut source)
    }

    /// Builds a store from an explicit config, drawing every series from `source`.
    pub fn with_source<S: SeriesSource + ?Sized>(config: StoreConfig, source: &mut S) -> Result<Self> {
        config.validate()?;
        let catalog = Catalog::new(config.stocks.iter().map(|e| e.stock()).collect())?;

        let points = config.points();
        let mut series = HashMap::with_capacity(catalog.len());
        for entry in &config.stocks {
            let data = source.generate(&entry.stock(), points);
            let ts = TimeSeries::for_entry(entry, &config.labels, data, config.tension);
            series.insert(entry.symbol.clone(), ts);
        }

        let selected_symbol = catalog.first().symbol.clone();
        info!(
            "stock store ready: {} stocks, {} points each, selected {}",
            catalog.len(),
            points,
            selected_symbol
        );

        Ok(Self {
            catalog,
            series,
            selected_symbol,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    /// The fixed, ordered catalog.
    pub fn stocks(&self) -> &[Stock] {
        self.catalog.stocks()
    }

    pub fn selected_symbol(&self) -> &str {
        &self.selected_symbol
    }

    /// `None` only after `select` was given a symbol outside the catalog.
    pub fn selected_stock(&self) -> Option<&Stock> {
        self.catalog.get(&self.selected_symbol)
    }

    /// `None` only after `select` was given a symbol outside the catalog.
    pub fn selected_series(&self) -> Option<&TimeSeries> {
        self.series.get(&self.selected_symbol)
    }

    pub fn series_for(&self, symbol: &str) -> Option<&TimeSeries> {
        self.series.get(symbol)
    }

    /// Overwrites the selection with no validation; unknown symbols make the
    /// derived reads return `None`. Listeners fire only on an actual change.
    pub fn select(&mut self, symbol: &str) {
        if self.selected_symbol == symbol {
            return;
        }
        if !self.catalog.contains(symbol) {
            warn!("selected symbol {} is not in the catalog", symbol);
        }
        let previous = std::mem::replace(&mut self.selected_symbol, symbol.to_string());
        debug!("selection changed: {} -> {}", previous, symbol);

        let change = SelectionChange {
            previous,
            current: self.selected_symbol.clone(),
        };
        for (_, listener) in &self.listeners {
            listener(&change);
        }
    }

    /// Like `select`, but refuses symbols outside the catalog and leaves the
    /// state untouched in that case.
    pub fn try_select(&mut self, symbol: &str) -> Result<()> {
        if !self.catalog.contains(symbol) {
            return Err(StoreError::UnknownSymbol(symbol.to_string()));
        }
        self.select(symbol);
        Ok(())
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&SelectionChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            stocks: self.catalog.stocks(),
            selected_symbol: &self.selected_symbol,
            stock_data: &self.series,
        }
    }
}

impl Default for StockStore {
    fn default() -> Self {
        Self::new()
    }
}
