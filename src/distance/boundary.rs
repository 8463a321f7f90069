//! Boundary extraction from hazard zone polygons.

use geo::{LineString, MultiPolygon, Point};
use tracing::{debug, info, warn};

use super::geodesy::closest_on_ring;
use super::ZoneFilter;
use crate::error::InputIssue;
use crate::models::{HazardZone, ZoneShape};

/// Edge rings (exterior and interior) of one allowed hazard zone
#[derive(Debug, Clone)]
pub struct Boundary {
    /// Index of the source zone in the input
    pub zone_index: usize,
    rings: Vec<LineString<f64>>,
}

impl Boundary {
    /// Collect every ring of a multi-polygon. Fails on empty geometries and
    /// on rings that are too short or carry non-finite coordinates.
    pub fn from_multi_polygon(zone_index: usize, geometry: &MultiPolygon<f64>) -> Result<Self, String> {
        let mut rings = Vec::new();
        for polygon in geometry {
            for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                if ring.0.len() < 2 {
                    return Err(format!("ring has {} positions", ring.0.len()));
                }
                if ring.coords().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
                    return Err("ring has non-finite coordinates".to_string());
                }
                rings.push(ring.clone());
            }
        }

        if rings.is_empty() {
            return Err("geometry has no rings".to_string());
        }

        Ok(Self { zone_index, rings })
    }

    /// Nearest point on any ring and its great-circle distance in km.
    /// The first ring wins ties.
    pub fn closest_point(&self, from: Point<f64>) -> Option<(Point<f64>, f64)> {
        let mut best: Option<(Point<f64>, f64)> = None;
        for ring in &self.rings {
            if let Some((p, km)) = closest_on_ring(ring, from) {
                if best.map_or(true, |(_, best_km)| km < best_km) {
                    best = Some((p, km));
                }
            }
        }
        best
    }
}

/// Derive boundaries for every zone the filter allows, in input order.
///
/// Zones outside the filter are dropped silently; allowed zones whose
/// geometry can't be used are dropped with an issue.
pub fn build_boundaries(
    zones: &[HazardZone],
    filter: &ZoneFilter,
) -> (Vec<Boundary>, Vec<InputIssue>) {
    info!(
        "Building boundaries for {} zones (allowed classes: {:?})",
        zones.len(),
        filter.classes()
    );

    let mut boundaries = Vec::new();
    let mut issues = Vec::new();

    for (index, zone) in zones.iter().enumerate() {
        if !filter.allows(zone.zone_class.as_deref()) {
            continue;
        }

        let built = match &zone.shape {
            ZoneShape::Area(geometry) => Boundary::from_multi_polygon(index, geometry),
            ZoneShape::Unsupported(reason) => Err(reason.clone()),
        };

        match built {
            Ok(boundary) => boundaries.push(boundary),
            Err(reason) => {
                warn!("Skipping zone #{}: {}", index, reason);
                issues.push(InputIssue::polygon(index, reason));
            }
        }
    }

    debug!(
        "Built {} boundaries with {} rings",
        boundaries.len(),
        boundaries.iter().map(|b| b.rings.len()).sum::<usize>()
    );

    (boundaries, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, Coord, Polygon};

    fn square(min_x: f64, min_y: f64, size: f64) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![polygon![
            (x: min_x, y: min_y),
            (x: min_x + size, y: min_y),
            (x: min_x + size, y: min_y + size),
            (x: min_x, y: min_y + size),
            (x: min_x, y: min_y),
        ]])
    }

    #[test]
    fn test_filter_drops_disallowed_zones() {
        let zones = vec![
            HazardZone::new("AE", square(0.0, 0.0, 1.0)),
            HazardZone::new("X", square(2.0, 0.0, 1.0)),
            HazardZone::new("VE", square(4.0, 0.0, 1.0)),
        ];
        let (boundaries, issues) = build_boundaries(&zones, &ZoneFilter::default());

        assert!(issues.is_empty());
        let indices: Vec<usize> = boundaries.iter().map(|b| b.zone_index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_interior_rings_are_part_of_boundary() {
        let exterior = LineString::new(vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 4.0, y: 0.0 },
            Coord { x: 4.0, y: 4.0 },
            Coord { x: 0.0, y: 4.0 },
            Coord { x: 0.0, y: 0.0 },
        ]);
        let hole = LineString::new(vec![
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 3.0, y: 1.0 },
            Coord { x: 3.0, y: 3.0 },
            Coord { x: 1.0, y: 3.0 },
            Coord { x: 1.0, y: 1.0 },
        ]);
        let geometry = MultiPolygon::new(vec![Polygon::new(exterior, vec![hole])]);
        let boundary = Boundary::from_multi_polygon(0, &geometry).unwrap();
        assert_eq!(boundary.rings.len(), 2);

        // Inside the hole, the hole's edge is much closer than the exterior
        let (p, _) = boundary.closest_point(Point::new(2.0, 1.2)).unwrap();
        assert!((p.y() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_unusable_allowed_zone_reports_issue() {
        let degenerate = MultiPolygon::new(vec![Polygon::new(
            LineString::new(vec![Coord { x: 0.0, y: 0.0 }]),
            vec![],
        )]);
        let zones = vec![
            HazardZone::new("AE", degenerate),
            HazardZone {
                zone_class: Some("A".to_string()),
                shape: ZoneShape::Unsupported("unsupported geometry type Point".to_string()),
                properties: Default::default(),
            },
            HazardZone {
                zone_class: Some("X".to_string()),
                shape: ZoneShape::Unsupported("unsupported geometry type Point".to_string()),
                properties: Default::default(),
            },
            HazardZone::new("AO", square(0.0, 0.0, 1.0)),
        ];
        let (boundaries, issues) = build_boundaries(&zones, &ZoneFilter::default());

        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].zone_index, 3);
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], InputIssue::PolygonInput { index: 0, .. }));
        assert!(matches!(issues[1], InputIssue::PolygonInput { index: 1, .. }));
    }

    #[test]
    fn test_empty_multi_polygon_rejected() {
        let err = Boundary::from_multi_polygon(0, &MultiPolygon::new(vec![])).unwrap_err();
        assert!(err.contains("no rings"));
    }
}
