//! Floodline - distances from facilities to the nearest floodplain boundary
//!
//! This library provides the distance engine, the GeoJSON feature model and
//! I/O used by the precompute binary.

pub mod config;
pub mod distance;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;

pub use distance::{compute_distances, great_circle_km, ZoneFilter};
pub use error::{Error, InputIssue, Result};
pub use models::{ConnectorLine, DistanceReport, DistanceResult, HazardZone, PointFeature};
pub use pipeline::{compute_distances_geojson, connector_lines, DistanceOptions, DistanceOutput};
