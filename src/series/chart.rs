// src/series/chart.rs
//! Chart-ready time series.
//!
//! The serialized form is consumed as-is by line/bar charting front-ends:
//! `{"labels": [...], "datasets": [{"label", "backgroundColor", "borderColor", "data", "tension"}]}`.
//! Field names and order must not change.

use crate::config::CatalogEntry;
use crate::errors::StoreError;
use serde::{Deserialize, Serialize};

/// One styled bundle of data points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub background_color: String,
    pub border_color: String,
    pub data: Vec<u32>,
    /// Curve-smoothing hint for the renderer.
    pub tension: f64,
}

/// Period labels plus exactly one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSeries")]
pub struct TimeSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

// Wire form before the one-dataset check.
#[derive(Deserialize)]
struct RawTimeSeries {
    labels: Vec<String>,
    datasets: Vec<Dataset>,
}

impl TryFrom<RawTimeSeries> for TimeSeries {
    type Error = StoreError;

    fn try_from(raw: RawTimeSeries) -> Result<Self, Self::Error> {
        if raw.datasets.len() != 1 {
            return Err(StoreError::DatasetCount(raw.datasets.len()));
        }
        Ok(Self {
            labels: raw.labels,
            datasets: raw.datasets,
        })
    }
}

impl TimeSeries {
    /// Builds the series for one catalog entry from already generated points.
    pub fn for_entry(entry: &CatalogEntry, labels: &[String], data: Vec<u32>, tension: f64) -> Self {
        let dataset = Dataset {
            label: entry.stock().display_label(),
            background_color: entry.color.clone(),
            border_color: entry.color.clone(),
            data,
            tension,
        };
        Self {
            labels: labels.to_vec(),
            datasets: vec![dataset],
        }
    }

    /// The single dataset every series carries.
    pub fn dataset(&self) -> &Dataset {
        &self.datasets[0]
    }

    pub fn data(&self) -> &[u32] {
        &self.dataset().data
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
