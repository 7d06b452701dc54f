//! Total command - hectare totals for a set of farms.

use std::path::Path;

use farmgeo::farm::{AggregateHectareCalculator, FarmSizeResolver};
use tracing::info;

use super::resolve::parse_farms;
use crate::error::CliError;
use crate::runner::{print_json, CliRunner};

/// Run the total command.
pub fn run(runner: &CliRunner, file: &Path) -> Result<(), CliError> {
    runner.log_startup("total");

    let farms = parse_farms(file)?;
    let calculator =
        AggregateHectareCalculator::new(FarmSizeResolver::new(runner.config().resolver_config()));

    let summary = calculator.summarize(&farms);
    info!(
        total_hectares = summary.total_hectares,
        unknown = summary.unknown_farms,
        "Summarized {} farms",
        summary.farm_count
    );

    print_json(&summary)
}
