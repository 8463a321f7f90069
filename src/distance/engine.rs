//! Nearest-boundary search for a batch of points.

use geo::Point;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::{build_boundaries, Boundary, ZoneFilter};
use crate::error::InputIssue;
use crate::models::{
    ConnectorLine, DistanceReport, DistanceResult, HazardZone, Location, PointFeature, RunStats,
};

/// Nearest point on any boundary and its distance in km.
///
/// Boundaries are scanned in order with a strict `<`, so the first boundary
/// wins ties.
pub fn nearest_on_boundaries(from: Point<f64>, boundaries: &[Boundary]) -> Option<(Point<f64>, f64)> {
    let mut best: Option<(Point<f64>, f64)> = None;
    for boundary in boundaries {
        if let Some((p, km)) = boundary.closest_point(from) {
            if best.map_or(true, |(_, best_km)| km < best_km) {
                best = Some((p, km));
            }
        }
    }
    best
}

/// Compute, for every point, the distance to the nearest boundary of any
/// zone whose class the filter allows.
///
/// Results come back one per point in input order. Points are evaluated in
/// parallel; each reads the shared boundary set only.
pub fn compute_distances(
    points: &[PointFeature],
    zones: &[HazardZone],
    filter: &ZoneFilter,
) -> DistanceReport {
    let (boundaries, mut issues) = build_boundaries(zones, filter);

    if boundaries.is_empty() {
        warn!("No boundaries to measure against; every point gets an empty result");
    }

    info!(
        "Computing distances for {} points against {} boundaries",
        points.len(),
        boundaries.len()
    );

    let evaluated: Vec<(DistanceResult, Option<InputIssue>)> = points
        .par_iter()
        .enumerate()
        .map(|(index, point)| match &point.location {
            Location::Valid(location) => {
                let result = nearest_on_boundaries(*location, &boundaries)
                    .map(|(nearest, km)| DistanceResult::found(nearest, km))
                    .unwrap_or_default();
                (result, None)
            }
            Location::Invalid(reason) => (
                DistanceResult::none(),
                Some(InputIssue::point(index, reason.clone())),
            ),
        })
        .collect();

    let mut results = Vec::with_capacity(points.len());
    let mut lines = Vec::new();

    for (index, ((result, issue), point)) in evaluated.into_iter().zip(points).enumerate() {
        if let Some(issue) = issue {
            warn!("Skipping {}", issue);
            issues.push(issue);
        }

        if let (Some(from), Some(to), Some(distance_km)) =
            (point.location.point(), result.nearest, result.distance_km)
        {
            lines.push(ConnectorLine {
                point_index: index,
                center_name: point.display_name().map(str::to_string),
                from,
                to,
                distance_km,
            });
        }
        results.push(result);
    }

    let stats = RunStats {
        points: points.len(),
        zones: zones.len(),
        zones_allowed: zones
            .iter()
            .filter(|z| filter.allows(z.zone_class.as_deref()))
            .count(),
        boundaries: boundaries.len(),
        lines: lines.len(),
    };

    debug!("Distance run finished: {:?}", stats);

    DistanceReport {
        results,
        lines,
        issues,
        stats,
    }
}
