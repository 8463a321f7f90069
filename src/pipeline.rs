//! Feature-collection level entry points.
//!
//! These wrap the distance engine for the two callers it has: the offline
//! precompute run, which wants both output collections, and in-memory
//! refreshes, which only need the connector lines.

use geojson::FeatureCollection;
use tracing::info;

use crate::config::{DEFAULT_LINES_NAME, DEFAULT_ZONE_FIELD};
use crate::distance::{compute_distances, ZoneFilter};
use crate::io::{
    annotated_points_collection, lines_collection, points_from_collection, zones_from_collection,
};
use crate::models::DistanceReport;

/// How zones are read and filtered, and how the output is named
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceOptions {
    /// Property holding the zone class
    pub zone_field: String,
    pub filter: ZoneFilter,
    /// `name` member of the connector lines collection
    pub lines_name: String,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self {
            zone_field: DEFAULT_ZONE_FIELD.to_string(),
            filter: ZoneFilter::default(),
            lines_name: DEFAULT_LINES_NAME.to_string(),
        }
    }
}

/// Output of a collection-level run
#[derive(Debug, Clone)]
pub struct DistanceOutput {
    /// Input points with `distance_to_floodplain_km` and
    /// `nearest_floodplain_point` added
    pub points: FeatureCollection,
    pub lines: FeatureCollection,
    pub report: DistanceReport,
}

/// Run the engine over two parsed collections
pub fn compute_distances_geojson(
    points: &FeatureCollection,
    zones: &FeatureCollection,
    options: &DistanceOptions,
) -> DistanceOutput {
    let point_features = points_from_collection(points);
    let zone_features = zones_from_collection(zones, &options.zone_field);

    let report = compute_distances(&point_features, &zone_features, &options.filter);

    info!(
        "{} of {} points have a floodplain distance ({} issues)",
        report.stats.lines,
        report.stats.points,
        report.issues.len()
    );

    let name = points
        .foreign_members
        .as_ref()
        .and_then(|members| members.get("name"));

    DistanceOutput {
        points: annotated_points_collection(name, &point_features, &report.results),
        lines: lines_collection(&report.lines, Some(&options.lines_name)),
        report,
    }
}

/// Connector lines only, for collections already held in memory.
///
/// Re-applying the filter to zones that were filtered upstream changes
/// nothing.
pub fn connector_lines(
    points: &FeatureCollection,
    zones: &FeatureCollection,
    options: &DistanceOptions,
) -> FeatureCollection {
    let point_features = points_from_collection(points);
    let zone_features = zones_from_collection(zones, &options.zone_field);
    let report = compute_distances(&point_features, &zone_features, &options.filter);
    lines_collection(&report.lines, None)
}
