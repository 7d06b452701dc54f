//! Configuration for farmgeo.
//!
//! Settings live in an INI file at `~/.farmgeo/config.ini`. A missing file
//! means defaults. The file is split by concern:
//!
//! - [`settings`]: one struct per `[section]`
//! - [`defaults`]: `DEFAULT_*` constants and `ConfigFile::default()`
//! - `parser`: INI → [`ConfigFile`]
//! - `writer`: [`ConfigFile`] → commented INI
//!
//! # Example
//!
//! ```
//! use farmgeo::area::AreaStrategy;
//! use farmgeo::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.area.strategy, AreaStrategy::SphericalExcess);
//! assert!(!config.resolver_config().require_valid_polygon());
//! ```

pub mod defaults;
mod file;
mod parser;
pub mod settings;
mod writer;

pub use defaults::{DEFAULT_AREA_STRATEGY, DEFAULT_LOG_FILE_NAME, DEFAULT_REQUIRE_VALID_POLYGON};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{AreaSettings, ConfigFile, LoggingSettings, ResolverSettings};
