//! Validate command - checks a boundary polygon.

use std::path::Path;

use farmgeo::geometry::check_polygon;
use tracing::info;

use crate::error::CliError;
use crate::runner::{read_json, CliRunner};

/// Run the validate command.
///
/// Prints `valid` on success; an invalid polygon is reported as an error so
/// the process exits non-zero.
pub fn run(runner: &CliRunner, file: &Path) -> Result<(), CliError> {
    runner.log_startup("validate");

    let value = read_json(file)?;
    check_polygon(&value).map_err(CliError::InvalidPolygon)?;

    info!(file = %file.display(), "Polygon is valid");
    println!("valid");
    Ok(())
}
