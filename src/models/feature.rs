//! Typed input features: facility points and hazard zones.

use geo::{Coord, LineString, MultiPolygon, Point, Polygon};
use geojson::{feature::Id, Bbox, Feature, Geometry, JsonObject, Value};

/// Property keys checked, in order, for a point's display name
const NAME_KEYS: [&str; 2] = ["Name", "name"];

/// Where a point sits, or why it can't be used
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// WGS84 lon/lat in degrees, finite and in range
    Valid(Point<f64>),
    /// Missing, non-Point or out-of-range geometry
    Invalid(String),
}

impl Location {
    /// Validate a lon/lat pair in degrees
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        if !lon.is_finite() || !lat.is_finite() {
            return Location::Invalid(format!("non-finite coordinates ({}, {})", lon, lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Location::Invalid(format!("longitude {} out of range", lon));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Location::Invalid(format!("latitude {} out of range", lat));
        }
        Location::Valid(Point::new(lon, lat))
    }

    fn from_geometry(geometry: Option<&Geometry>) -> Self {
        match geometry.map(|g| &g.value) {
            Some(Value::Point(position)) => match position.as_slice() {
                [lon, lat, ..] => Location::from_lon_lat(*lon, *lat),
                _ => Location::Invalid(format!("position has {} values", position.len())),
            },
            Some(other) => {
                Location::Invalid(format!("expected Point geometry, found {}", value_kind(other)))
            }
            None => Location::Invalid("missing geometry".to_string()),
        }
    }

    pub fn point(&self) -> Option<Point<f64>> {
        match self {
            Location::Valid(p) => Some(*p),
            Location::Invalid(_) => None,
        }
    }
}

/// A named facility location (community center, church, ...).
///
/// Everything the source feature carried is kept so it can be written back
/// out unchanged next to the computed properties.
#[derive(Debug, Clone)]
pub struct PointFeature {
    /// Source feature id, if any
    pub id: Option<Id>,

    /// Parsed location
    pub location: Location,

    /// Source properties, passed through verbatim
    pub properties: JsonObject,

    geometry: Option<Geometry>,
    bbox: Option<Bbox>,
    foreign_members: Option<JsonObject>,
}

impl PointFeature {
    /// Create a point feature from a lon/lat pair
    pub fn new(lon: f64, lat: f64, properties: JsonObject) -> Self {
        Self {
            id: None,
            location: Location::from_lon_lat(lon, lat),
            properties,
            geometry: Some(Geometry::new(Value::Point(vec![lon, lat]))),
            bbox: None,
            foreign_members: None,
        }
    }

    /// Convenience constructor with only a `name` property
    pub fn named(name: &str, lon: f64, lat: f64) -> Self {
        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), name.into());
        Self::new(lon, lat, properties)
    }

    /// Wrap a GeoJSON feature. Never fails: bad geometry becomes
    /// `Location::Invalid` and is reported when distances are computed.
    pub fn from_feature(feature: Feature) -> Self {
        let location = Location::from_geometry(feature.geometry.as_ref());
        Self {
            id: feature.id,
            location,
            properties: feature.properties.unwrap_or_default(),
            geometry: feature.geometry,
            bbox: feature.bbox,
            foreign_members: feature.foreign_members,
        }
    }

    /// First non-empty `Name` / `name` string property
    pub fn display_name(&self) -> Option<&str> {
        NAME_KEYS.iter().find_map(|key| {
            self.properties
                .get(*key)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
        })
    }

    /// Rebuild a GeoJSON feature with the source geometry and the given
    /// properties
    pub fn to_feature(&self, properties: JsonObject) -> Feature {
        Feature {
            bbox: self.bbox.clone(),
            geometry: self.geometry.clone(),
            id: self.id.clone(),
            properties: Some(properties),
            foreign_members: self.foreign_members.clone(),
        }
    }
}

/// Geometry of a hazard zone
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneShape {
    Area(MultiPolygon<f64>),
    /// Geometry that can't be turned into a boundary, with the reason
    Unsupported(String),
}

/// A hazard polygon tagged with its zone class (e.g. FEMA `FLD_ZONE`).
#[derive(Debug, Clone)]
pub struct HazardZone {
    /// Zone class value, `None` if the attribute is missing or not a string
    pub zone_class: Option<String>,

    pub shape: ZoneShape,

    /// Source properties, passed through verbatim
    pub properties: JsonObject,
}

impl HazardZone {
    #[cfg(test)]
    pub(crate) fn new(zone_class: &str, geometry: MultiPolygon<f64>) -> Self {
        Self {
            zone_class: Some(zone_class.to_string()),
            shape: ZoneShape::Area(geometry),
            properties: JsonObject::new(),
        }
    }

    /// Wrap a GeoJSON feature, reading the zone class from `zone_field`
    pub fn from_feature(feature: Feature, zone_field: &str) -> Self {
        let properties = feature.properties.unwrap_or_default();
        let zone_class = properties
            .get(zone_field)
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let shape = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Polygon(rings)) => match polygon_from_rings(rings) {
                Ok(polygon) => ZoneShape::Area(MultiPolygon::new(vec![polygon])),
                Err(reason) => ZoneShape::Unsupported(reason),
            },
            Some(Value::MultiPolygon(polygons)) => polygons
                .iter()
                .map(|rings| polygon_from_rings(rings))
                .collect::<Result<Vec<_>, _>>()
                .map(|polys| ZoneShape::Area(MultiPolygon::new(polys)))
                .unwrap_or_else(ZoneShape::Unsupported),
            Some(other) => {
                ZoneShape::Unsupported(format!("unsupported geometry type {}", value_kind(other)))
            }
            None => ZoneShape::Unsupported("missing geometry".to_string()),
        };

        Self {
            zone_class,
            shape,
            properties,
        }
    }
}

fn polygon_from_rings(rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>, String> {
    let mut converted = rings.iter().map(|ring| ring_from_positions(ring));
    let exterior = converted
        .next()
        .ok_or_else(|| "polygon has no rings".to_string())??;
    let interiors = converted.collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn ring_from_positions(positions: &[Vec<f64>]) -> Result<LineString<f64>, String> {
    if positions.len() < 2 {
        return Err(format!("ring has {} positions", positions.len()));
    }
    positions
        .iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Coord { x: *x, y: *y }),
            _ => Err(format!("invalid ring position {:?}", position)),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::new)
}

/// GeoJSON type name of a geometry value
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
