//! Boundary area calculation.
//!
//! Computes the unsigned area, in square meters, enclosed by a ring of
//! geographic points. Two strategies are available:
//!
//! - [`AreaStrategy::SphericalExcess`] (default): spherical-excess
//!   approximation on a sphere of radius [`EARTH_RADIUS_M`].
//! - [`AreaStrategy::Planar`]: equirectangular projection followed by the
//!   Shoelace formula. Projection error grows with parcel size.
//!
//! Degenerate input (fewer than three distinct vertices, null, non-array)
//! measures as `0.0`. Zero means "area unknown", not "zero-area farm".
//!
//! Only the exterior ring is measured. Interior rings (holes) are never
//! subtracted.
//!
//! # Example
//!
//! ```
//! use farmgeo::area::{AreaCalculator, AreaStrategy};
//! use serde_json::json;
//!
//! let polygon = json!({
//!     "type": "Polygon",
//!     "coordinates": [[[0, 0], [0.0009, 0], [0.0009, 0.0009], [0, 0.0009], [0, 0]]]
//! });
//!
//! let result = AreaCalculator::new(AreaStrategy::SphericalExcess).measure(&polygon);
//! assert_eq!(result.hectares, 1.0);
//! ```

mod strategy;


pub use strategy::{AreaStrategy, ParseStrategyError};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::geometry::{describe, parse_ring, Coordinate, GeoPolygon};
use crate::units::{round_to, to_acres, to_hectares};

/// Mean Earth radius in meters, shared by every spherical calculation.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree of longitude at the equator (planar projection).
pub const METERS_PER_DEGREE_LON: f64 = 111_320.0;

/// Meters per degree of latitude (planar projection).
pub const METERS_PER_DEGREE_LAT: f64 = 110_540.0;

/// Fewest distinct vertices that can enclose an area.
const MIN_DISTINCT_VERTICES: usize = 3;

/// Area of a boundary in the units consumers display.
///
/// `square_meters` is rounded to a whole number. `hectares` and `acres` are
/// derived from the unrounded area and rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaResult {
    pub square_meters: u64,
    pub hectares: f64,
    pub acres: f64,
}

impl AreaResult {
    /// Build a result from an unrounded square-meter area.
    ///
    /// Negative or non-finite input is treated as unknown (zero).
    pub fn from_square_meters(square_meters: f64) -> Self {
        if !square_meters.is_finite() || square_meters <= 0.0 {
            return Self::default();
        }

        Self {
            square_meters: square_meters.round() as u64,
            hectares: round_to(to_hectares(square_meters), 2),
            acres: round_to(to_acres(square_meters), 2),
        }
    }

    /// True when no area could be derived.
    pub fn is_zero(&self) -> bool {
        self.square_meters == 0
    }
}

/// Measures boundary rings with a fixed strategy.
///
/// Stateless and `Copy`; construct one wherever it is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AreaCalculator {
    strategy: AreaStrategy,
}

impl AreaCalculator {
    /// Create a calculator using the given strategy.
    pub fn new(strategy: AreaStrategy) -> Self {
        Self { strategy }
    }

    /// The strategy this calculator applies.
    pub fn strategy(&self) -> AreaStrategy {
        self.strategy
    }

    /// Area enclosed by `ring`, in square meters.
    ///
    /// The ring may be open or closed. Vertex order (clockwise or
    /// counter-clockwise) does not change the magnitude.
    pub fn ring_area(&self, ring: &[Coordinate]) -> f64 {
        if distinct_vertices(ring) < MIN_DISTINCT_VERTICES {
            return 0.0;
        }

        match self.strategy {
            AreaStrategy::Planar => planar_area(ring),
            AreaStrategy::SphericalExcess => spherical_excess_area(ring),
        }
    }

    /// Area of a validated polygon's exterior ring, in square meters.
    pub fn polygon_area(&self, polygon: &GeoPolygon) -> f64 {
        self.ring_area(polygon.exterior())
    }

    /// Area of an untrusted JSON boundary, in square meters.
    ///
    /// Accepts a GeoJSON polygon object, a list of rings, or a bare ring.
    /// Points may use any shape `parse_coordinate` understands. Anything
    /// else measures as `0.0`.
    pub fn value_area(&self, value: &Value) -> f64 {
        match exterior_ring(value) {
            Some(ring) => self.ring_area(&ring),
            None => 0.0,
        }
    }

    /// Measure an untrusted JSON boundary in all display units.
    pub fn measure(&self, value: &Value) -> AreaResult {
        AreaResult::from_square_meters(self.value_area(value))
    }
}

/// Extract and normalize the exterior ring from an untrusted boundary value.
///
/// Accepts the same shapes as [`AreaCalculator::value_area`]. Returns `None`
/// when there is nothing usable. Null is an ordinary absence; any other
/// unusable shape is logged as a caller error.
pub fn exterior_ring(value: &Value) -> Option<Vec<Coordinate>> {
    let ring_value = match value {
        Value::Null => return None,
        Value::Object(object) => match object.get("coordinates") {
            Some(Value::Array(rings)) => rings.first()?,
            _ => {
                warn!(shape = %describe(value), "Boundary object has no coordinate rings");
                return None;
            }
        },
        Value::Array(items) if is_ring_list(items) => &items[0],
        Value::Array(_) => value,
        other => {
            warn!(shape = %describe(other), "Boundary is not a polygon or ring");
            return None;
        }
    };

    match parse_ring(ring_value) {
        Ok(ring) => Some(ring),
        Err(e) => {
            warn!(error = %e, "Boundary ring contains an unusable point");
            None
        }
    }
}

/// A list of rings has an array as its first element whose own first element
/// is a point (array or object) rather than a number.
fn is_ring_list(items: &[Value]) -> bool {
    match items.first() {
        Some(Value::Array(first)) => matches!(first.first(), Some(Value::Array(_) | Value::Object(_))),
        _ => false,
    }
}

/// Vertex count, not counting a closing point that repeats the first.
fn distinct_vertices(ring: &[Coordinate]) -> usize {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.len() - 1
    } else {
        ring.len()
    }
}

/// Equirectangular projection plus Shoelace over cyclic indices.
fn planar_area(ring: &[Coordinate]) -> f64 {
    let projected: Vec<(f64, f64)> = ring
        .iter()
        .map(|c| {
            let x = c.lon * METERS_PER_DEGREE_LON * c.lat.to_radians().cos();
            let y = c.lat * METERS_PER_DEGREE_LAT;
            (x, y)
        })
        .collect();

    let n = projected.len();
    let sum: f64 = (0..n)
        .map(|i| {
            let (x1, y1) = projected[i];
            let (x2, y2) = projected[(i + 1) % n];
            x1 * y2 - x2 * y1
        })
        .sum();

    sum.abs() / 2.0
}

/// Spherical excess: `|Σ Δlon·(2 + sin φ1 + sin φ2)| · R² / 2`.
///
/// An open ring is closed by revisiting its first vertex.
fn spherical_excess_area(ring: &[Coordinate]) -> f64 {
    let closing = if ring.first() == ring.last() {
        None
    } else {
        ring.first()
    };
    let path = ring.iter().chain(closing);

    let sum: f64 = path
        .clone()
        .zip(path.skip(1))
        .map(|(a, b)| {
            (b.lon - a.lon).to_radians() * (2.0 + a.lat.to_radians().sin() + b.lat.to_radians().sin())
        })
        .sum();

    let area = sum.abs() * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0;
    debug!(vertices = ring.len(), area_m2 = area, "Spherical excess area");
    area
}
