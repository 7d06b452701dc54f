//! Area strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Algorithm used to turn a ring of geographic points into square meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaStrategy {
    /// Equirectangular projection + Shoelace. Small parcels only.
    Planar,
    /// Spherical-excess approximation. The authoritative method.
    #[default]
    SphericalExcess,
}

impl AreaStrategy {
    /// Config-file spelling of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaStrategy::Planar => "planar",
            AreaStrategy::SphericalExcess => "spherical",
        }
    }
}

impl fmt::Display for AreaStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown area strategy '{0}' (expected 'spherical' or 'planar')")]
pub struct ParseStrategyError(pub String);

impl FromStr for AreaStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planar" | "shoelace" => Ok(AreaStrategy::Planar),
            "spherical" | "spherical_excess" | "haversine" => Ok(AreaStrategy::SphericalExcess),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_spherical() {
        assert_eq!(AreaStrategy::default(), AreaStrategy::SphericalExcess);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("planar".parse::<AreaStrategy>(), Ok(AreaStrategy::Planar));
        assert_eq!("Shoelace".parse::<AreaStrategy>(), Ok(AreaStrategy::Planar));
        assert_eq!(" spherical ".parse::<AreaStrategy>(), Ok(AreaStrategy::SphericalExcess));
        assert_eq!("haversine".parse::<AreaStrategy>(), Ok(AreaStrategy::SphericalExcess));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "mercator".parse::<AreaStrategy>().unwrap_err();
        assert_eq!(err, ParseStrategyError("mercator".to_string()));
        assert!(err.to_string().contains("mercator"));
    }

    #[test]
    fn test_display_round_trips() {
        for strategy in [AreaStrategy::Planar, AreaStrategy::SphericalExcess] {
            assert_eq!(strategy.to_string().parse::<AreaStrategy>(), Ok(strategy));
        }
    }
}
