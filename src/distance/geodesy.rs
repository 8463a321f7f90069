//! Great-circle helpers on top of `geo`.

use geo::{Closest, Distance, Haversine, HaversineClosestPoint, LineString, Point};

/// Haversine distance in kilometers (mean Earth radius 6371.0088 km)
pub fn great_circle_km(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b) / 1000.0
}

/// Closest point on a ring, following great-circle arcs between vertices,
/// and its distance in km.
pub fn closest_on_ring(ring: &LineString<f64>, from: Point<f64>) -> Option<(Point<f64>, f64)> {
    match ring.haversine_closest_point(&from) {
        Closest::Intersection(p) | Closest::SinglePoint(p) => {
            let km = great_circle_km(from, p);
            km.is_finite().then_some((p, km))
        }
        Closest::Indeterminate => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;

    #[test]
    fn test_great_circle_known_distance() {
        // Houston to Dallas is roughly 362 km
        let houston = Point::new(-95.3698, 29.7604);
        let dallas = Point::new(-96.7970, 32.7767);
        let km = great_circle_km(houston, dallas);
        assert!((km - 362.0).abs() < 5.0, "got {}", km);
    }

    #[test]
    fn test_one_km_along_meridian() {
        let origin = Point::new(-95.370, 29.760);
        let north = Point::new(-95.370, 29.760 + (1.0f64 / 6371.0088).to_degrees());
        assert!((great_circle_km(origin, north) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_closest_on_ring_interior_of_segment() {
        let ring = LineString::new(vec![
            Coord { x: -95.40, y: 29.80 },
            Coord { x: -95.30, y: 29.80 },
        ]);
        let from = Point::new(-95.35, 29.75);
        let (p, km) = closest_on_ring(&ring, from).unwrap();
        assert!((p.x() + 95.35).abs() < 1e-6);
        assert!((p.y() - 29.80).abs() < 1e-3);
        assert!((km - great_circle_km(from, p)).abs() < 1e-12);
    }

    #[test]
    fn test_point_on_ring_has_zero_distance() {
        let ring = LineString::new(vec![
            Coord { x: -95.40, y: 29.80 },
            Coord { x: -95.30, y: 29.80 },
        ]);
        let (_, km) = closest_on_ring(&ring, Point::new(-95.40, 29.80)).unwrap();
        assert!(km.abs() < 1e-6);
    }
}
