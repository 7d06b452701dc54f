//! Farmer lifecycle status derivation.
//!
//! Status moves between `Enrolled` and `FarmCaptured` as farms are added or
//! removed. `Validated` and `Verified` are set by an external review workflow
//! and are terminal here: nothing in this module assigns them, and nothing
//! moves a farmer out of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Registration lifecycle status of a farmer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FarmerStatus {
    /// Registered, no farms captured yet
    #[default]
    Enrolled,
    /// At least one farm captured
    #[serde(alias = "Farm Captured")]
    FarmCaptured,
    /// Reviewed by the external validation workflow
    Validated,
    /// Identity verified by the external verification workflow
    Verified,
}

impl FarmerStatus {
    /// True for statuses only the external workflow may assign.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FarmerStatus::Validated | FarmerStatus::Verified)
    }

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            FarmerStatus::Enrolled => "Enrolled",
            FarmerStatus::FarmCaptured => "FarmCaptured",
            FarmerStatus::Validated => "Validated",
            FarmerStatus::Verified => "Verified",
        }
    }
}

impl fmt::Display for FarmerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown farmer status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for FarmerStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "enrolled" => Ok(FarmerStatus::Enrolled),
            "farmcaptured" => Ok(FarmerStatus::FarmCaptured),
            "validated" => Ok(FarmerStatus::Validated),
            "verified" => Ok(FarmerStatus::Verified),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// The fields of a farmer record this crate reads.
///
/// Other record fields are carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Farmer {
    /// Current lifecycle status. A missing or null status reads as
    /// `Enrolled`. Serializes with the canonical spelling, so an input of
    /// `"Farm Captured"` is written back as `"FarmCaptured"`.
    #[serde(default, deserialize_with = "status_or_default")]
    pub status: FarmerStatus,

    /// Remaining record fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Farmer {
    /// A farmer record with the given status.
    pub fn with_status(status: FarmerStatus) -> Self {
        Self {
            status,
            extra: Map::new(),
        }
    }
}

fn status_or_default<'de, D>(deserializer: D) -> Result<FarmerStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<FarmerStatus>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Derives a farmer's status from the number of farms they own.
///
/// - `Validated` / `Verified` are returned unchanged, even with no farms.
/// - Otherwise any farms means `FarmCaptured`.
/// - Otherwise `Enrolled`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FarmerStatusResolver;

impl FarmerStatusResolver {
    /// Create a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Status for `farmer` given the caller-supplied farm count.
    pub fn resolve(&self, farmer: &Farmer, farm_count: u32) -> FarmerStatus {
        derive_status(farmer.status, farm_count)
    }
}

/// Status transition on a bare status value.
pub fn derive_status(current: FarmerStatus, farm_count: u32) -> FarmerStatus {
    if current.is_terminal() {
        current
    } else if farm_count > 0 {
        FarmerStatus::FarmCaptured
    } else {
        FarmerStatus::Enrolled
    }
}
