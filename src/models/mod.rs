//! Core data models for the floodplain distance engine.

pub mod feature;
pub mod result;

pub use feature::{HazardZone, Location, PointFeature, ZoneShape};
pub use result::{
    ConnectorLine, DistanceReport, DistanceResult, RunStats, DISTANCE_PROPERTY,
    NEAREST_POINT_PROPERTY,
};
