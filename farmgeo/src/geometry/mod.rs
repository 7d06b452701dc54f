//! Boundary geometry: coordinates, polygon validation, and centroids.
//!
//! Everything here is pure and allocation-light. Malformed input is reported
//! through typed errors or `false`; nothing in this module panics on bad data.

mod centroid;
mod coordinate;
mod polygon;

pub use centroid::centroid;
pub use coordinate::{
    parse_coordinate, parse_ring, Coordinate, CoordinateError, CoordinateInput, MAX_LAT, MAX_LON,
    MIN_LAT, MIN_LON,
};
pub use polygon::{check_polygon, validate, GeoPolygon, PolygonError, MIN_RING_POINTS};

pub(crate) use coordinate::describe;
