//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization, and JSON input/output
//! so each command handler only deals with its own logic.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use farmgeo::config::{config_file_path, ConfigFile, DEFAULT_LOG_FILE_NAME};
use farmgeo::logging::{init_logging, LoggingGuard};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Explicit config file, or the default location
    /// * `verbose` - Enable debug-level logging when RUST_LOG is unset
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Result<Self, CliError> {
        let config_path = config_path.unwrap_or_else(config_file_path);
        let config = ConfigFile::load_from(&config_path)?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());

        let logging_guard = init_logging(&log_dir, &log_file, verbose)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("farmgeo v{}", farmgeo::VERSION);
        info!(
            strategy = %self.config.area.strategy,
            require_valid_polygon = self.config.resolver.require_valid_polygon,
            "farmgeo CLI: {} command",
            command
        );
    }
}

/// Read a JSON document from a file, or stdin when the path is `-`.
pub fn read_json(path: &Path) -> Result<Value, CliError> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    }
    .map_err(|error| CliError::FileRead {
        path: path.to_path_buf(),
        error,
    })?;

    serde_json::from_str(&text).map_err(|error| CliError::Json {
        path: path.to_path_buf(),
        error,
    })
}

/// Read a list of records: a JSON array, or a single object.
pub fn read_records(path: &Path) -> Result<Vec<Value>, CliError> {
    match read_json(path)? {
        Value::Array(items) => Ok(items),
        object @ Value::Object(_) => Ok(vec![object]),
        _ => Err(CliError::InvalidRecord {
            index: 0,
            reason: "expected an array of records or a single record".to_string(),
        }),
    }
}

/// Print a value to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| CliError::Output(e.to_string()))?;
    println!("{}", text);
    Ok(())
}
