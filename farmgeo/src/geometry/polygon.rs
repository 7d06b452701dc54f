//! GeoJSON polygon validation and typed polygon access.
//!
//! Boundary geometry arrives as untrusted JSON. [`check_polygon`] walks the
//! value in a fixed order and reports the first structural or range problem;
//! [`validate`] is its boolean form. Only values that pass become a typed
//! [`GeoPolygon`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use super::coordinate::{Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Minimum points in a closed linear ring (a triangle plus its closing point).
pub const MIN_RING_POINTS: usize = 4;

/// Reasons a value is not a well-formed polygon boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonError {
    #[error("Polygon must be a JSON object")]
    NotAnObject,

    #[error("Geometry type must be 'Polygon', found {0}")]
    WrongType(String),

    #[error("Polygon has no rings")]
    MissingRings,

    #[error("Exterior ring has {found} points (minimum 4)")]
    TooFewPoints { found: usize },

    #[error("Point {index} of the exterior ring is not a [lon, lat] pair")]
    MalformedPoint { index: usize },

    #[error("Point {index} is out of range (lon={lon}, lat={lat})")]
    OutOfRange { index: usize, lon: f64, lat: f64 },

    #[error("Exterior ring is not closed (first and last points differ)")]
    NotClosed,

    #[error("Interior ring {ring} is not a list of [lon, lat] pairs")]
    MalformedInteriorRing { ring: usize },
}

/// Check a value against the polygon boundary rules, stopping at the first failure.
///
/// Checks, in order: object; `type == "Polygon"`; non-empty `coordinates`;
/// exterior ring of at least four points; every point a numeric pair; every
/// point in geographic range; exterior ring closed.
pub fn check_polygon(value: &Value) -> Result<(), PolygonError> {
    let object = value.as_object().ok_or(PolygonError::NotAnObject)?;

    match object.get("type") {
        Some(Value::String(kind)) if kind == "Polygon" => {}
        Some(Value::String(kind)) => return Err(PolygonError::WrongType(format!("'{}'", kind))),
        Some(other) => return Err(PolygonError::WrongType(other.to_string())),
        None => return Err(PolygonError::WrongType("nothing".to_string())),
    }

    let rings = object
        .get("coordinates")
        .and_then(Value::as_array)
        .filter(|rings| !rings.is_empty())
        .ok_or(PolygonError::MissingRings)?;

    let exterior = rings[0].as_array().ok_or(PolygonError::MissingRings)?;
    if exterior.len() < MIN_RING_POINTS {
        return Err(PolygonError::TooFewPoints {
            found: exterior.len(),
        });
    }

    let mut points = Vec::with_capacity(exterior.len());
    for (index, point) in exterior.iter().enumerate() {
        let coord = position(point).ok_or(PolygonError::MalformedPoint { index })?;
        points.push(coord);
    }

    for (index, coord) in points.iter().enumerate() {
        if !coord.in_range() {
            return Err(PolygonError::OutOfRange {
                index,
                lon: coord.lon,
                lat: coord.lat,
            });
        }
    }

    if points.first() != points.last() {
        return Err(PolygonError::NotClosed);
    }

    Ok(())
}

/// Returns true when `value` is a well-formed polygon boundary.
///
/// Never panics; any malformed input (null, wrong type, wrong arity) is `false`.
pub fn validate(value: &Value) -> bool {
    check_polygon(value).is_ok()
}

/// Strict GeoJSON position: an array of exactly two finite numbers.
fn position(value: &Value) -> Option<Coordinate> {
    match value.as_array()?.as_slice() {
        [lon, lat] => {
            let lon = lon.as_f64()?;
            let lat = lat.as_f64()?;
            (lon.is_finite() && lat.is_finite()).then_some(Coordinate::new(lon, lat))
        }
        _ => None,
    }
}

/// A validated GeoJSON polygon.
///
/// The first ring is the exterior boundary. Interior rings (holes) are kept
/// for round-tripping but are not range-checked and never reduce area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct GeoPolygon {
    rings: Vec<Vec<Coordinate>>,
}

impl GeoPolygon {
    /// Build a polygon from an untrusted JSON value.
    pub fn from_value(value: &Value) -> Result<Self, PolygonError> {
        check_polygon(value)?;

        // check_polygon guarantees the exterior ring shape.
        let rings = value["coordinates"].as_array().map(Vec::as_slice).unwrap_or_default();
        let mut parsed = Vec::with_capacity(rings.len());
        for (ring_index, ring) in rings.iter().enumerate() {
            let ring = ring
                .as_array()
                .and_then(|points| points.iter().map(position).collect::<Option<Vec<_>>>())
                .ok_or(PolygonError::MalformedInteriorRing { ring: ring_index })?;
            parsed.push(ring);
        }

        Ok(Self { rings: parsed })
    }

    /// Build a polygon from an exterior ring, closing it if needed.
    pub fn from_exterior(mut ring: Vec<Coordinate>) -> Result<Self, PolygonError> {
        if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
            if first != last {
                ring.push(first);
            }
        }
        let polygon = Self { rings: vec![ring] };
        check_polygon(&polygon.to_value())?;
        Ok(polygon)
    }

    /// The exterior boundary ring.
    pub fn exterior(&self) -> &[Coordinate] {
        &self.rings[0]
    }

    /// Interior rings (holes), in input order.
    pub fn interiors(&self) -> &[Vec<Coordinate>] {
        &self.rings[1..]
    }

    /// GeoJSON representation.
    pub fn to_value(&self) -> Value {
        let coordinates: Vec<Vec<[f64; 2]>> = self
            .rings
            .iter()
            .map(|ring| ring.iter().map(|c| c.to_position()).collect())
            .collect();
        json!({ "type": "Polygon", "coordinates": coordinates })
    }
}

impl TryFrom<Value> for GeoPolygon {
    type Error = PolygonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        GeoPolygon::from_value(&value)
    }
}

impl From<GeoPolygon> for Value {
    fn from(polygon: GeoPolygon) -> Self {
        polygon.to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Value {
        json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [0.0009, 0], [0.0009, 0.0009], [0, 0.0009], [0, 0]]]
        })
    }

    #[test]
    fn test_valid_square() {
        assert!(validate(&square()));
        assert_eq!(check_polygon(&square()), Ok(()));
    }

    #[test]
    fn test_null_and_empty_object() {
        assert!(!validate(&Value::Null));
        assert!(!validate(&json!({})));
        assert_eq!(check_polygon(&json!(42)), Err(PolygonError::NotAnObject));
    }

    #[test]
    fn test_wrong_type() {
        let value = json!({"type": "LineString", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]});
        assert_eq!(
            check_polygon(&value),
            Err(PolygonError::WrongType("'LineString'".to_string()))
        );
    }

    #[test]
    fn test_missing_or_empty_rings() {
        assert_eq!(
            check_polygon(&json!({"type": "Polygon"})),
            Err(PolygonError::MissingRings)
        );
        assert_eq!(
            check_polygon(&json!({"type": "Polygon", "coordinates": []})),
            Err(PolygonError::MissingRings)
        );
    }

    #[test]
    fn test_two_point_ring_rejected() {
        let value = json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 1]]]});
        assert_eq!(
            check_polygon(&value),
            Err(PolygonError::TooFewPoints { found: 2 })
        );
    }

    #[test]
    fn test_three_element_point_rejected() {
        let value = json!({"type": "Polygon", "coordinates": [[[0, 0, 5], [1, 0], [1, 1], [0, 0]]]});
        assert_eq!(
            check_polygon(&value),
            Err(PolygonError::MalformedPoint { index: 0 })
        );
    }

    #[test]
    fn test_string_point_rejected() {
        let value = json!({"type": "Polygon", "coordinates": [[[0, 0], ["1", 0], [1, 1], [0, 0]]]});
        assert_eq!(
            check_polygon(&value),
            Err(PolygonError::MalformedPoint { index: 1 })
        );
    }

    #[test]
    fn test_out_of_range_latitude() {
        let value = json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 95], [1, 1], [0, 0]]]});
        assert!(matches!(
            check_polygon(&value),
            Err(PolygonError::OutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn test_out_of_range_longitude() {
        let value = json!({"type": "Polygon", "coordinates": [[[0, 0], [181, 0], [1, 1], [0, 0]]]});
        assert!(matches!(
            check_polygon(&value),
            Err(PolygonError::OutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn test_open_ring_rejected() {
        let value = json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1]]]});
        assert_eq!(check_polygon(&value), Err(PolygonError::NotClosed));
    }

    #[test]
    fn test_range_checked_before_closure() {
        let value = json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 100], [0, 1]]]});
        assert!(matches!(
            check_polygon(&value),
            Err(PolygonError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_holes_accepted_structurally() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [
                [[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]],
                [[0.2, 0.2], [0.4, 0.2], [0.4, 0.4], [0.2, 0.2]]
            ]
        });
        assert!(validate(&value));

        let polygon = GeoPolygon::from_value(&value).unwrap();
        assert_eq!(polygon.exterior().len(), 5);
        assert_eq!(polygon.interiors().len(), 1);
    }

    #[test]
    fn test_malformed_hole_rejected_by_typed_polygon() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]], "hole"]
        });
        assert!(validate(&value));
        assert_eq!(
            GeoPolygon::from_value(&value),
            Err(PolygonError::MalformedInteriorRing { ring: 1 })
        );
    }

    #[test]
    fn test_from_exterior_closes_ring() {
        let polygon = GeoPolygon::from_exterior(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(polygon.exterior().len(), 4);
        assert_eq!(polygon.exterior()[0], polygon.exterior()[3]);
    }

    #[test]
    fn test_from_exterior_rejects_short_ring() {
        let result = GeoPolygon::from_exterior(vec![Coordinate::new(0.0, 0.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let polygon: GeoPolygon = serde_json::from_value(square()).unwrap();
        let back = serde_json::to_value(&polygon).unwrap();
        assert_eq!(back["type"], "Polygon");
        assert_eq!(back["coordinates"][0].as_array().unwrap().len(), 5);

        let invalid: Result<GeoPolygon, _> = serde_json::from_value(json!({"type": "Point"}));
        assert!(invalid.is_err());
    }
}
