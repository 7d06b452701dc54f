//! Resolve command - fills in derived farm sizes.

use std::path::Path;

use farmgeo::farm::{Farm, FarmSizeResolver};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::CliError;
use crate::runner::{print_json, read_records, CliRunner};

/// Run the resolve command.
pub fn run(runner: &CliRunner, file: &Path) -> Result<(), CliError> {
    runner.log_startup("resolve");

    let farms = parse_farms(file)?;
    let resolver = FarmSizeResolver::new(runner.config().resolver_config());

    let resolved: Vec<Farm> = farms.iter().map(|farm| resolver.resolve(farm)).collect();
    let derived = resolved.iter().filter(|farm| farm.is_size_calculated()).count();
    info!(farms = resolved.len(), derived, "Resolved farm sizes");

    print_json(&resolved)
}

/// Read farm records, degrading malformed ones instead of failing the batch.
///
/// A record that is not an object becomes an empty farm (unknown size). A
/// typed field holding the wrong JSON type is dropped. Both are logged with
/// the record index.
pub(crate) fn parse_farms(file: &Path) -> Result<Vec<Farm>, CliError> {
    Ok(read_records(file)?
        .into_iter()
        .enumerate()
        .map(|(index, record)| farm_from_record(index, record))
        .collect())
}

fn farm_from_record(index: usize, record: Value) -> Farm {
    let Value::Object(object) = record else {
        warn!(index, "Farm record is not a JSON object, treating size as unknown");
        return Farm::new();
    };

    let (farm, dropped) = Farm::from_object_lossy(object);
    for field in dropped {
        warn!(index, field, "Ignoring farm field with the wrong JSON type");
    }
    farm
}
