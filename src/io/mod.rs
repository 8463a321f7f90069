//! GeoJSON feature collection input and output.

mod reader;
mod writer;

pub use reader::{
    parse_feature_collection, points_from_collection, read_feature_collection,
    zones_from_collection,
};
pub use writer::{
    annotated_points_collection, lines_collection, to_geojson_string, write_feature_collection,
};
