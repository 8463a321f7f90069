//! Writing annotated points and connector lines.

use std::fs;
use std::path::Path;

use geojson::{FeatureCollection, JsonObject, JsonValue};
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{ConnectorLine, DistanceResult, PointFeature};

/// Points collection with the result properties added to every feature.
///
/// Only the source collection's `name` member is carried over (`crs` and
/// other members are dropped).
pub fn annotated_points_collection(
    name: Option<&JsonValue>,
    points: &[PointFeature],
    results: &[DistanceResult],
) -> FeatureCollection {
    let features = points
        .iter()
        .zip(results)
        .map(|(point, result)| point.to_feature(result.annotate(&point.properties)))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: name_member(name.cloned()),
    }
}

/// Connector lines as their own named collection
pub fn lines_collection(lines: &[ConnectorLine], name: Option<&str>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: lines.iter().map(ConnectorLine::to_feature).collect(),
        foreign_members: name_member(name.map(JsonValue::from)),
    }
}

/// Pretty-print a collection with two-space indent.
///
/// Members come out as `type`, `bbox`, named members such as `name`, then
/// `features`; property order inside each feature is kept as read.
pub fn to_geojson_string(fc: &FeatureCollection) -> Result<String> {
    let mut object = JsonObject::new();
    object.insert("type".to_string(), JsonValue::from("FeatureCollection"));
    if let Some(bbox) = &fc.bbox {
        object.insert("bbox".to_string(), JsonValue::from(bbox.clone()));
    }
    if let Some(members) = &fc.foreign_members {
        for (key, value) in members {
            object.insert(key.clone(), value.clone());
        }
    }
    object.insert("features".to_string(), serde_json::to_value(&fc.features)?);
    Ok(serde_json::to_string_pretty(&object)?)
}

/// Write a collection to `path` as formatted by [`to_geojson_string`]
pub fn write_feature_collection<P: AsRef<Path>>(path: P, fc: &FeatureCollection) -> Result<()> {
    let path = path.as_ref();
    let json = to_geojson_string(fc)?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} features to {}", fc.features.len(), path.display());
    Ok(())
}

fn name_member(name: Option<JsonValue>) -> Option<JsonObject> {
    name.map(|value| {
        let mut members = JsonObject::new();
        members.insert("name".to_string(), value);
        members
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{parse_feature_collection, points_from_collection, read_feature_collection};
    use geo::Point;
    use serde_json::json;

    #[test]
    fn test_annotated_points_keep_properties_and_id() {
        let feature: geojson::Feature = serde_json::from_value(json!({
            "type": "Feature",
            "id": "cc-17",
            "geometry": { "type": "Point", "coordinates": [-95.37, 29.76] },
            "properties": { "Name": "Acres Homes", "ADDRESS": "6719 W Montgomery Rd" }
        }))
        .unwrap();
        let points = vec![
            PointFeature::from_feature(feature),
            PointFeature::named("Moody Park", -95.35, 29.80),
        ];
        let results = vec![
            DistanceResult::found(Point::new(-95.37, 29.77), 1.1),
            DistanceResult::none(),
        ];

        let fc = annotated_points_collection(Some(&json!("centers")), &points, &results);
        let value = serde_json::to_value(&fc).unwrap();

        assert_eq!(value["type"], json!("FeatureCollection"));
        assert_eq!(value["name"], json!("centers"));
        assert_eq!(value["features"][0]["id"], json!("cc-17"));
        assert_eq!(
            value["features"][0]["properties"]["ADDRESS"],
            json!("6719 W Montgomery Rd")
        );
        assert_eq!(
            value["features"][0]["properties"]["distance_to_floodplain_km"],
            json!(1.1)
        );
        assert_eq!(
            value["features"][0]["geometry"]["coordinates"],
            json!([-95.37, 29.76])
        );
        assert_eq!(
            value["features"][1]["properties"]["distance_to_floodplain_km"],
            JsonValue::Null
        );
        assert_eq!(
            value["features"][1]["properties"]["nearest_floodplain_point"],
            JsonValue::Null
        );
    }

    fn position(text: &str, needle: &str) -> usize {
        text.find(needle)
            .unwrap_or_else(|| panic!("{} not found in {}", needle, text))
    }

    #[test]
    fn test_output_keeps_source_key_order() {
        let source = parse_feature_collection(
            r#"{
                "type": "FeatureCollection",
                "name": "c",
                "features": [{
                    "type": "Feature",
                    "properties": { "Zeta": 1, "Name": "Acres Homes", "ADDRESS": "x" },
                    "geometry": null
                }]
            }"#,
        )
        .unwrap();
        let points = points_from_collection(&source);
        let results = vec![DistanceResult::none()];
        let name = source.foreign_members.as_ref().and_then(|m| m.get("name"));

        let fc = annotated_points_collection(name, &points, &results);
        let text = to_geojson_string(&fc).unwrap();

        // Collection members: type, name, features
        assert!(position(&text, "\"type\"") < position(&text, "\"name\": \"c\""));
        assert!(position(&text, "\"name\": \"c\"") < position(&text, "\"features\""));

        // Properties in source order, computed ones appended
        let keys = [
            "\"Zeta\"",
            "\"Name\"",
            "\"ADDRESS\"",
            "\"distance_to_floodplain_km\"",
            "\"nearest_floodplain_point\"",
        ];
        for pair in keys.windows(2) {
            assert!(
                position(&text, pair[0]) < position(&text, pair[1]),
                "{} should precede {} in {}",
                pair[0],
                pair[1],
                text
            );
        }
    }

    #[test]
    fn test_write_then_read_lines() {
        let lines = vec![ConnectorLine {
            point_index: 0,
            center_name: None,
            from: Point::new(-95.37, 29.76),
            to: Point::new(-95.37, 29.77),
            distance_km: 1.11,
        }];
        let fc = lines_collection(&lines, Some("distance-lines"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.geojson");
        write_feature_collection(&path, &fc).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \""));

        let back = read_feature_collection(&path).unwrap();
        assert_eq!(back.features.len(), 1);
        assert_eq!(
            back.foreign_members.unwrap().get("name"),
            Some(&json!("distance-lines"))
        );
        assert_eq!(
            back.features[0].property("centerName"),
            Some(&JsonValue::Null)
        );
    }
}
