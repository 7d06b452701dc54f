//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::area::AreaStrategy;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Area calculation settings
    pub area: AreaSettings,
    /// Farm size resolution settings
    pub resolver: ResolverSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// `[area]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSettings {
    /// Area algorithm: spherical (default) or planar
    pub strategy: AreaStrategy,
}

/// `[resolver]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    /// Only derive farm sizes from fully valid, closed polygons
    pub require_valid_polygon: bool,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
