//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::area::AreaStrategy;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [area] section
    if let Some(section) = ini.section(Some("area")) {
        if let Some(v) = section.get("strategy") {
            config.area.strategy =
                v.parse::<AreaStrategy>()
                    .map_err(|_| ConfigFileError::InvalidValue {
                        section: "area".to_string(),
                        key: "strategy".to_string(),
                        value: v.to_string(),
                        reason: "must be 'spherical' or 'planar'".to_string(),
                    })?;
        }
    }

    // [resolver] section
    if let Some(section) = ini.section(Some("resolver")) {
        if let Some(v) = section.get("require_valid_polygon") {
            config.resolver.require_valid_polygon =
                parse_bool(v).ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "resolver".to_string(),
                    key: "require_valid_polygon".to_string(),
                    value: v.to_string(),
                    reason: "must be true or false".to_string(),
                })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
