// src/errors.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("catalog must contain at least one stock")]
    EmptyCatalog,

    #[error("duplicate symbol in catalog: {0}")]
    DuplicateSymbol(String),

    #[error("invalid price range: min {min} > max {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("series needs at least one label")]
    EmptyLabels,

    #[error("series must carry exactly one dataset, got {0}")]
    DatasetCount(usize),

    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
