//! Loading GeoJSON feature collections.

use std::fs;
use std::path::Path;

use geojson::{FeatureCollection, GeoJson};
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{HazardZone, PointFeature};

/// Parse a GeoJSON document that must be a FeatureCollection
pub fn parse_feature_collection(text: &str) -> Result<FeatureCollection> {
    match text.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        GeoJson::Feature(_) => Err(Error::NotAFeatureCollection("Feature")),
        GeoJson::Geometry(_) => Err(Error::NotAFeatureCollection("Geometry")),
    }
}

/// Read and parse a FeatureCollection file
pub fn read_feature_collection<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let fc = parse_feature_collection(&text)?;
    info!("Loaded {} features from {}", fc.features.len(), path.display());
    Ok(fc)
}

/// Wrap every feature as a point feature, keeping input order
pub fn points_from_collection(fc: &FeatureCollection) -> Vec<PointFeature> {
    fc.features
        .iter()
        .cloned()
        .map(PointFeature::from_feature)
        .collect()
}

/// Wrap every feature as a hazard zone, keeping input order
pub fn zones_from_collection(fc: &FeatureCollection, zone_field: &str) -> Vec<HazardZone> {
    fc.features
        .iter()
        .cloned()
        .map(|f| HazardZone::from_feature(f, zone_field))
        .collect()
}
