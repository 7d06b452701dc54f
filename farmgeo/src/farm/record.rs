//! Farm record snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Typed record fields and the JSON type each accepts besides null.
const TYPED_FIELDS: [(&str, fn(&Value) -> bool); 3] = [
    ("farmSize", Value::is_number),
    ("farmArea", Value::is_number),
    ("calculatedSize", Value::is_boolean),
];

/// The fields of a farm record this crate reads and derives.
///
/// Any other fields in the caller's record are carried through untouched in
/// `extra`, so a resolved snapshot serializes back to the caller's shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    /// Farm size in hectares. Authoritative unless `calculated_size` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farm_size: Option<f64>,

    /// Boundary geometry as stored, possibly malformed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farm_polygon: Option<Value>,

    /// Mirror of the computed boundary area in square meters. Never used as
    /// an authority for `farm_size`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farm_area: Option<f64>,

    /// True only when `farm_size` was derived from `farm_polygon`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_size: Option<bool>,

    /// Remaining record fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Farm {
    /// An empty farm record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an authoritative size in hectares.
    pub fn with_size(mut self, hectares: f64) -> Self {
        self.farm_size = Some(hectares);
        self
    }

    /// Set the stored boundary geometry.
    pub fn with_polygon(mut self, polygon: Value) -> Self {
        self.farm_polygon = Some(polygon);
        self
    }

    /// Build a farm from an untrusted record object.
    ///
    /// Typed fields holding the wrong JSON type are removed, so the farm
    /// reads as if they were absent. Returns the farm and the names of the
    /// removed fields.
    pub fn from_object_lossy(mut object: Map<String, Value>) -> (Self, Vec<&'static str>) {
        let mut dropped = Vec::new();
        for (key, accepts) in TYPED_FIELDS {
            if object.get(key).is_some_and(|v| !v.is_null() && !accepts(v)) {
                object.remove(key);
                dropped.push(key);
            }
        }

        // Only the typed fields can fail; everything else lands in `extra`.
        let farm = serde_json::from_value(Value::Object(object)).unwrap_or_default();
        (farm, dropped)
    }

    /// True when `farm_size` holds a usable (positive) value.
    pub fn has_size(&self) -> bool {
        matches!(self.farm_size, Some(size) if size > 0.0)
    }

    /// True when `farm_size` was derived rather than recorded.
    pub fn is_size_calculated(&self) -> bool {
        self.calculated_size == Some(true)
    }
}
