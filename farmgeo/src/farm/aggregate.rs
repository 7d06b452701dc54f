//! Hectare totals across many farms.

use serde::Serialize;

use super::record::Farm;
use super::resolver::{FarmSizeResolver, SizeProvenance};
use crate::units::round_to;

/// Totals for a dashboard or analytics pass over a set of farms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HectareSummary {
    /// Sum of resolved farm sizes, rounded to two places
    pub total_hectares: f64,
    /// Number of farms examined
    pub farm_count: usize,
    /// Farms with a recorded size
    pub authoritative_farms: usize,
    /// Farms whose size was derived from a boundary
    pub calculated_farms: usize,
    /// Farms with no usable size
    pub unknown_farms: usize,
}

/// Sums resolved farm sizes.
///
/// Every farm is resolved first, so boundaries fill in missing sizes. Farms
/// that still have no positive size contribute nothing. The sum is rounded
/// once, at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateHectareCalculator {
    resolver: FarmSizeResolver,
}

impl AggregateHectareCalculator {
    /// Create a calculator that resolves farms with `resolver`.
    pub fn new(resolver: FarmSizeResolver) -> Self {
        Self { resolver }
    }

    /// Total hectares across `farms`, rounded to two decimal places.
    ///
    /// An empty slice totals `0.0`. The input is not modified.
    pub fn total_hectares(&self, farms: &[Farm]) -> f64 {
        let sum: f64 = farms.iter().map(|farm| self.resolved_size(farm)).sum();
        round_to(sum, 2)
    }

    /// Total hectares plus a breakdown by size provenance.
    pub fn summarize(&self, farms: &[Farm]) -> HectareSummary {
        let mut summary = HectareSummary {
            farm_count: farms.len(),
            ..HectareSummary::default()
        };
        let mut sum = 0.0;

        for farm in farms {
            let resolved = self.resolver.resolve(farm);
            match self.resolver.provenance(&resolved) {
                SizeProvenance::Authoritative => summary.authoritative_farms += 1,
                SizeProvenance::Calculated => summary.calculated_farms += 1,
                SizeProvenance::Unknown => summary.unknown_farms += 1,
            }
            sum += positive_size(&resolved);
        }

        summary.total_hectares = round_to(sum, 2);
        summary
    }

    fn resolved_size(&self, farm: &Farm) -> f64 {
        positive_size(&self.resolver.resolve(farm))
    }
}

fn positive_size(farm: &Farm) -> f64 {
    farm.farm_size
        .filter(|size| size.is_finite() && *size > 0.0)
        .unwrap_or(0.0)
}
