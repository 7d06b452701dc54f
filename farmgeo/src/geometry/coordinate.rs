//! Coordinate normalization.
//!
//! Farm records store boundary points in more than one shape: GeoJSON
//! `[lng, lat]` arrays, `{latitude, longitude}` objects, and `{lat, lng}`
//! objects. Every shape is normalized into a canonical [`Coordinate`] here,
//! before any area or centroid math sees it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Valid latitude range (degrees)
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range (degrees)
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic point in decimal degrees, longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude (east-west), -180 to 180
    pub lon: f64,
    /// Latitude (north-south), -90 to 90
    pub lat: f64,
}

impl Coordinate {
    /// Create a coordinate from a longitude/latitude pair.
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns true when both components lie inside the geographic range.
    pub fn in_range(&self) -> bool {
        (MIN_LON..=MAX_LON).contains(&self.lon) && (MIN_LAT..=MAX_LAT).contains(&self.lat)
    }

    /// GeoJSON position order: `[lon, lat]`.
    pub fn to_position(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

/// Every coordinate shape accepted at the record boundary.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoordinateInput {
    /// GeoJSON position, `[lng, lat]`
    Position([f64; 2]),
    /// `{ "latitude": .., "longitude": .. }`
    Named { latitude: f64, longitude: f64 },
    /// `{ "lat": .., "lng": .. }`
    Short { lat: f64, lng: f64 },
}

impl TryFrom<CoordinateInput> for Coordinate {
    type Error = CoordinateError;

    fn try_from(input: CoordinateInput) -> Result<Self, Self::Error> {
        let (lon, lat) = match input {
            CoordinateInput::Position([lon, lat]) => (lon, lat),
            CoordinateInput::Named {
                latitude,
                longitude,
            } => (longitude, latitude),
            CoordinateInput::Short { lat, lng } => (lng, lat),
        };

        if !lon.is_finite() || !lat.is_finite() {
            return Err(CoordinateError::NonFinite { lon, lat });
        }
        Ok(Coordinate::new(lon, lat))
    }
}

/// Reasons a value cannot be turned into a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// The value matches none of the accepted coordinate shapes.
    #[error("Unrecognized coordinate shape: {0}")]
    UnrecognizedShape(String),

    /// A component is NaN or infinite.
    #[error("Coordinate is not finite (lon={lon}, lat={lat})")]
    NonFinite { lon: f64, lat: f64 },
}

/// Normalize one JSON coordinate into a canonical `(lon, lat)` pair.
///
/// Range is not checked here; that belongs to polygon validation.
pub fn parse_coordinate(value: &Value) -> Result<Coordinate, CoordinateError> {
    let input = CoordinateInput::deserialize(value)
        .map_err(|_| CoordinateError::UnrecognizedShape(describe(value)))?;
    Coordinate::try_from(input)
}

/// Normalize a JSON array of coordinates into a ring.
///
/// Fails on the first point that cannot be normalized.
pub fn parse_ring(value: &Value) -> Result<Vec<Coordinate>, CoordinateError> {
    let points = value
        .as_array()
        .ok_or_else(|| CoordinateError::UnrecognizedShape(describe(value)))?;
    points.iter().map(parse_coordinate).collect()
}

/// Short description of a JSON value for error messages.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => format!("array of {}", items.len()),
        Value::Object(map) => format!("object with {} keys", map.len()),
    }
}
