// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod config;
pub mod errors;
pub mod series;
pub mod shared;
pub mod sources;
pub mod stocks;
pub mod store;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `stocks` ---
pub use stocks::{Catalog, Stock, Symbol, default_catalog};

// --- From `series` ---
pub use series::{Dataset, TimeSeries};

// --- From `sources` ---
pub use sources::replay::ReplaySource;
pub use sources::source_trait::SeriesSource;
pub use sources::uniform::UniformSource;

// --- From our `store` ---
pub use shared::SharedStore;
pub use store::{SelectionChange, StockStore, StoreSnapshot, SubscriptionId};

// --- Config & errors ---
pub use config::{CatalogEntry, StoreConfig};
pub use errors::{Result, StoreError};
