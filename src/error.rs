//! Error types for loading, computing and writing floodplain distances.

use std::path::PathBuf;

use thiserror::Error;

/// Hard failures that abort a whole batch.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a FeatureCollection, found {0}")]
    NotAFeatureCollection(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Per-feature problems. These never abort a batch: the offending point gets
/// an empty result, the offending zone is left out of the boundary set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputIssue {
    #[error("point #{index}: {reason}")]
    PointInput { index: usize, reason: String },

    #[error("zone #{index}: {reason}")]
    PolygonInput { index: usize, reason: String },
}

impl InputIssue {
    pub fn point(index: usize, reason: impl Into<String>) -> Self {
        InputIssue::PointInput {
            index,
            reason: reason.into(),
        }
    }

    pub fn polygon(index: usize, reason: impl Into<String>) -> Self {
        InputIssue::PolygonInput {
            index,
            reason: reason.into(),
        }
    }
}
