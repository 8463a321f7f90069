//! Nearest-boundary distance engine.
//!
//! Measures, for each facility point, the great-circle distance to the
//! closest point on the boundary of any allowed hazard zone.

mod boundary;
mod engine;
mod filter;
mod geodesy;

pub use boundary::{build_boundaries, Boundary};
pub use engine::{compute_distances, nearest_on_boundaries};
pub use filter::{ZoneFilter, HUNDRED_YEAR_ZONES};
pub use geodesy::{closest_on_ring, great_circle_km};
