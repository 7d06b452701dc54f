//! Farm size resolution.
//!
//! Fills in `farm_size` from boundary geometry when no authoritative size
//! exists, and tags the result so callers can tell derived sizes from
//! recorded ones.

use serde::Serialize;
use tracing::debug;

use super::record::Farm;
use crate::area::{AreaCalculator, AreaStrategy};
use crate::geometry::check_polygon;
use crate::units::{round_to, to_hectares};

/// Configuration for [`FarmSizeResolver`].
///
/// # Example
///
/// ```
/// use farmgeo::area::AreaStrategy;
/// use farmgeo::farm::ResolverConfig;
///
/// let config = ResolverConfig::default();
/// assert_eq!(config.strategy(), AreaStrategy::SphericalExcess);
/// assert!(!config.require_valid_polygon());
///
/// let strict = ResolverConfig::new()
///     .with_strategy(AreaStrategy::Planar)
///     .with_require_valid_polygon(true);
/// assert!(strict.require_valid_polygon());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Area algorithm for derived sizes
    strategy: AreaStrategy,
    /// Only derive from polygons that pass full validation
    require_valid_polygon: bool,
}

impl ResolverConfig {
    /// Create a resolver configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the area strategy used for derived sizes.
    ///
    /// Default: spherical excess.
    pub fn with_strategy(mut self, strategy: AreaStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Require a fully valid, closed GeoJSON polygon before deriving a size.
    ///
    /// When false (the default), any boundary with at least three usable
    /// points is measured.
    pub fn with_require_valid_polygon(mut self, require: bool) -> Self {
        self.require_valid_polygon = require;
        self
    }

    /// Get the area strategy.
    pub fn strategy(&self) -> AreaStrategy {
        self.strategy
    }

    /// Get whether full polygon validation is required.
    pub fn require_valid_polygon(&self) -> bool {
        self.require_valid_polygon
    }
}

/// Where a resolved farm's size came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeProvenance {
    /// Recorded by the registration workflow
    Authoritative,
    /// Derived from the boundary polygon
    Calculated,
    /// Neither recorded nor derivable
    Unknown,
}

/// Derives missing farm sizes from boundary geometry.
///
/// Resolution rules, first match wins:
///
/// 1. A positive `farm_size` is authoritative; the farm is returned as is.
///    Geometry never overrides or cross-checks it.
/// 2. Otherwise, if the boundary measures to more than 0.00 ha (rounded to
///    two places), `farm_size` is set to that value, `calculated_size` to
///    true, and `farm_area` to the rounded square-meter area.
/// 3. Otherwise the farm is returned unchanged. A missing size stays missing.
///
/// Resolving a resolved farm returns it unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FarmSizeResolver {
    config: ResolverConfig,
}

impl FarmSizeResolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The resolver's configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Return a snapshot of `farm` with `farm_size` filled in when derivable.
    pub fn resolve(&self, farm: &Farm) -> Farm {
        if farm.has_size() {
            return farm.clone();
        }

        let Some(square_meters) = self.boundary_area(farm) else {
            return farm.clone();
        };

        let hectares = round_to(to_hectares(square_meters), 2);
        if hectares <= 0.0 {
            debug!(square_meters, "Boundary too small to yield a farm size");
            return farm.clone();
        }

        debug!(hectares, strategy = %self.config.strategy(), "Derived farm size from boundary");
        Farm {
            farm_size: Some(hectares),
            farm_area: Some(square_meters.round()),
            calculated_size: Some(true),
            ..farm.clone()
        }
    }

    /// Classify where a farm's size comes from, after resolution.
    pub fn provenance(&self, farm: &Farm) -> SizeProvenance {
        let resolved = self.resolve(farm);
        if !resolved.has_size() {
            SizeProvenance::Unknown
        } else if resolved.is_size_calculated() {
            SizeProvenance::Calculated
        } else {
            SizeProvenance::Authoritative
        }
    }

    /// Boundary area in square meters, if the farm has a usable boundary.
    fn boundary_area(&self, farm: &Farm) -> Option<f64> {
        let polygon = farm.farm_polygon.as_ref()?;

        if self.config.require_valid_polygon() {
            if let Err(reason) = check_polygon(polygon) {
                debug!(%reason, "Farm boundary rejected");
                return None;
            }
        }

        let square_meters = AreaCalculator::new(self.config.strategy()).value_area(polygon);
        (square_meters > 0.0).then_some(square_meters)
    }
}
