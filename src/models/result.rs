//! Computed distances and connector lines.

use geo::Point;
use geojson::{Feature, Geometry, JsonObject, JsonValue, Value};

use crate::error::InputIssue;

/// Point property holding the distance in km (or null)
pub const DISTANCE_PROPERTY: &str = "distance_to_floodplain_km";
/// Point property holding the nearest boundary point `[lon, lat]` (or null)
pub const NEAREST_POINT_PROPERTY: &str = "nearest_floodplain_point";

/// Distance from one point to the nearest allowed boundary.
///
/// `distance_km` and `nearest` are either both set or both empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DistanceResult {
    pub distance_km: Option<f64>,
    pub nearest: Option<Point<f64>>,
}

impl DistanceResult {
    pub fn found(nearest: Point<f64>, distance_km: f64) -> Self {
        Self {
            distance_km: Some(distance_km),
            nearest: Some(nearest),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Add the result properties to a copy of `properties`
    pub fn annotate(&self, properties: &JsonObject) -> JsonObject {
        let mut out = properties.clone();
        out.insert(
            DISTANCE_PROPERTY.to_string(),
            self.distance_km.map(JsonValue::from).unwrap_or(JsonValue::Null),
        );
        out.insert(
            NEAREST_POINT_PROPERTY.to_string(),
            self.nearest.map(position_json).unwrap_or(JsonValue::Null),
        );
        out
    }
}

/// Two-vertex line from a point to its nearest boundary point
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorLine {
    /// Index of the source point in the input
    pub point_index: usize,
    pub center_name: Option<String>,
    pub from: Point<f64>,
    pub to: Point<f64>,
    pub distance_km: f64,
}

impl ConnectorLine {
    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert(
            "centerName".to_string(),
            self.center_name
                .as_deref()
                .map(JsonValue::from)
                .unwrap_or(JsonValue::Null),
        );
        properties.insert("distance_km".to_string(), JsonValue::from(self.distance_km));
        properties.insert("center_coords".to_string(), position_json(self.from));
        properties.insert("nearest_point".to_string(), position_json(self.to));

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(vec![
                vec![self.from.x(), self.from.y()],
                vec![self.to.x(), self.to.y()],
            ]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Counters for one engine run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub points: usize,
    pub zones: usize,
    pub zones_allowed: usize,
    pub boundaries: usize,
    pub lines: usize,
}

/// Everything one engine run produces
#[derive(Debug, Clone, Default)]
pub struct DistanceReport {
    /// One entry per input point, in input order
    pub results: Vec<DistanceResult>,
    /// One entry per point with a result, in input order
    pub lines: Vec<ConnectorLine>,
    /// Points and zones that were skipped
    pub issues: Vec<InputIssue>,
    pub stats: RunStats,
}

fn position_json(p: Point<f64>) -> JsonValue {
    JsonValue::from(vec![p.x(), p.y()])
}
