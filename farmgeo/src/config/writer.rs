//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[area]
; Area algorithm for farm boundaries:
;   spherical - spherical-excess approximation (default, authoritative)
;   planar    - equirectangular projection + Shoelace (small parcels only)
strategy = {}

[resolver]
; Only derive farm sizes from valid, closed GeoJSON polygons.
; When false, any boundary with three usable points is measured.
require_valid_polygon = {}

[logging]
; Log file location (cleared at the start of every session)
file = {}
"#,
        config.area.strategy,
        config.resolver.require_valid_polygon,
        path_to_string(&config.logging.file),
    )
}

/// Convert path to string, collapsing home dir to ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
