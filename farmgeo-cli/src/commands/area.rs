//! Area command - measures a boundary polygon.

use std::path::Path;

use clap::ValueEnum;
use farmgeo::area::{exterior_ring, AreaCalculator, AreaResult, AreaStrategy};
use farmgeo::geometry::{centroid, validate, Coordinate};
use serde::Serialize;

use crate::error::CliError;
use crate::runner::{print_json, read_json, CliRunner};

/// Area strategy selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum StrategyArg {
    /// Spherical-excess approximation (authoritative)
    Spherical,
    /// Equirectangular projection + Shoelace (small parcels only)
    Planar,
}

impl From<StrategyArg> for AreaStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Spherical => AreaStrategy::SphericalExcess,
            StrategyArg::Planar => AreaStrategy::Planar,
        }
    }
}

/// Measurement report printed by the area command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AreaReport {
    #[serde(flatten)]
    area: AreaResult,
    strategy: AreaStrategy,
    valid_polygon: bool,
    centroid: Option<Coordinate>,
}

/// Run the area command.
pub fn run(runner: &CliRunner, file: &Path, strategy: Option<StrategyArg>) -> Result<(), CliError> {
    runner.log_startup("area");

    let value = read_json(file)?;
    let strategy = strategy
        .map(AreaStrategy::from)
        .unwrap_or(runner.config().area.strategy);

    let ring = exterior_ring(&value).unwrap_or_default();
    let square_meters = AreaCalculator::new(strategy).ring_area(&ring);

    let report = AreaReport {
        area: AreaResult::from_square_meters(square_meters),
        strategy,
        valid_polygon: validate(&value),
        centroid: (!ring.is_empty()).then(|| centroid(&ring)),
    };

    print_json(&report)
}
