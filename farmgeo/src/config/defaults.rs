//! Default values for all configuration settings.

use super::file::config_directory;
use super::settings::*;
use crate::area::AreaStrategy;

/// Default area algorithm.
pub const DEFAULT_AREA_STRATEGY: AreaStrategy = AreaStrategy::SphericalExcess;

/// Boundaries are measured when they have three usable points, valid or not.
pub const DEFAULT_REQUIRE_VALID_POLYGON: bool = false;

/// Log file name inside `~/.farmgeo/logs`.
pub const DEFAULT_LOG_FILE_NAME: &str = "farmgeo.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            area: AreaSettings {
                strategy: DEFAULT_AREA_STRATEGY,
            },
            resolver: ResolverSettings {
                require_valid_polygon: DEFAULT_REQUIRE_VALID_POLYGON,
            },
            logging: LoggingSettings {
                file: config_directory().join("logs").join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}
