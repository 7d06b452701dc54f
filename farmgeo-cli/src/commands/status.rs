//! Status command - derives farmer lifecycle status from farm counts.
//!
//! Each input record is a farmer record plus a `farmCount` supplied by the
//! exporting system. The output echoes each record with `status` set to the
//! derived status. Records that cannot be read are echoed unchanged and
//! logged.

use std::path::Path;

use farmgeo::farmer::{Farmer, FarmerStatus, FarmerStatusResolver};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::CliError;
use crate::runner::{print_json, read_records, CliRunner};

/// Field carrying the caller-supplied farm count.
const FARM_COUNT_KEY: &str = "farmCount";

/// Run the status command.
pub fn run(runner: &CliRunner, file: &Path) -> Result<(), CliError> {
    runner.log_startup("status");

    let resolver = FarmerStatusResolver::new();
    let mut skipped = 0usize;

    let output: Vec<Value> = read_records(file)?
        .into_iter()
        .enumerate()
        .map(|(index, record)| match read_farmer(&record) {
            Ok((farmer, farm_count)) => {
                let status = resolver.resolve(&farmer, farm_count);
                if status != farmer.status {
                    debug!(index, from = %farmer.status, to = %status, "Farmer status changed");
                }
                with_status(record, farmer.status, status)
            }
            Err(reason) => {
                warn!(index, %reason, "Farmer record left unchanged");
                skipped += 1;
                record
            }
        })
        .collect();

    info!(farmers = output.len(), skipped, "Derived farmer statuses");
    print_json(&output)
}

/// Read the farmer and the farm count from a record.
fn read_farmer(record: &Value) -> Result<(Farmer, u32), String> {
    if !record.is_object() {
        return Err("expected a JSON object".to_string());
    }

    let farm_count = record
        .get(FARM_COUNT_KEY)
        .ok_or_else(|| format!("missing {}", FARM_COUNT_KEY))?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| format!("{} must be a non-negative integer", FARM_COUNT_KEY))?;

    let farmer = Farmer::deserialize(record).map_err(|e| e.to_string())?;
    Ok((farmer, farm_count))
}

/// Write `status` into the record, keeping the caller's spelling when the
/// status is unchanged.
fn with_status(mut record: Value, current: FarmerStatus, status: FarmerStatus) -> Value {
    let keep = status == current && record.get("status").is_some_and(Value::is_string);
    if !keep {
        if let Value::Object(object) = &mut record {
            object.insert("status".to_string(), Value::from(status.as_str()));
        }
    }
    record
}
