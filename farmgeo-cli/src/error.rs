//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use farmgeo::config::ConfigFileError;
use farmgeo::geometry::PolygonError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Failed to read an input file
    FileRead { path: PathBuf, error: std::io::Error },
    /// Input is not valid JSON
    Json { path: PathBuf, error: serde_json::Error },
    /// A record in the input has the wrong shape
    InvalidRecord { index: usize, reason: String },
    /// Boundary failed validation
    InvalidPolygon(PolygonError),
    /// Failed to write output
    Output(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Json { .. } | CliError::InvalidRecord { .. } => {
                eprintln!();
                eprintln!("Input must be a JSON array of records (or a single record).");
                eprintln!("Use '-' as the file name to read from stdin.");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Fix the value in the configuration file, or reset it with");
                eprintln!("'farmgeo config init --force'.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read '{}': {}", path.display(), error)
            }
            CliError::Json { path, error } => {
                write!(f, "Invalid JSON in '{}': {}", path.display(), error)
            }
            CliError::InvalidRecord { index, reason } => {
                write!(f, "Record {}: {}", index, reason)
            }
            CliError::InvalidPolygon(e) => write!(f, "Invalid polygon: {}", e),
            CliError::Output(msg) => write!(f, "Failed to write output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::FileRead { error, .. } => Some(error),
            CliError::Json { error, .. } => Some(error),
            CliError::InvalidPolygon(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_record_display() {
        let err = CliError::InvalidRecord {
            index: 3,
            reason: "missing farmCount".to_string(),
        };
        assert_eq!(err.to_string(), "Record 3: missing farmCount");
    }

    #[test]
    fn test_invalid_polygon_display_and_source() {
        let err = CliError::InvalidPolygon(PolygonError::NotClosed);
        assert!(err.to_string().starts_with("Invalid polygon:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_file_read_display() {
        let err = CliError::FileRead {
            path: PathBuf::from("farms.json"),
            error: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("farms.json"));
    }
}
