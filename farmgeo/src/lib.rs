//! farmgeo - Farm boundary area measurement and derived registration fields
//!
//! This library derives the computed fields of a farmer registration system
//! from records the caller has already loaded:
//!
//! - [`geometry`]: coordinate normalization, polygon validation, centroids
//! - [`area`]: boundary area in square meters (spherical excess or planar)
//! - [`units`]: square meters to hectares and acres
//! - [`farm`]: recorded vs. derived farm size, hectare totals
//! - [`farmer`]: farmer lifecycle status from farm counts
//!
//! Every operation is a pure, synchronous function over immutable input.
//! Nothing here performs I/O except [`config`] and [`logging`], which exist
//! for binaries embedding the library.
//!
//! ```
//! use farmgeo::farm::{Farm, FarmSizeResolver};
//! use serde_json::json;
//!
//! let farm = Farm::new().with_polygon(json!({
//!     "type": "Polygon",
//!     "coordinates": [[[0, 0], [0.0009, 0], [0.0009, 0.0009], [0, 0.0009], [0, 0]]]
//! }));
//!
//! let resolved = FarmSizeResolver::default().resolve(&farm);
//! assert_eq!(resolved.farm_size, Some(1.0));
//! assert_eq!(resolved.calculated_size, Some(true));
//! ```

pub mod area;
pub mod config;
pub mod farm;
pub mod farmer;
pub mod geometry;
pub mod logging;
pub mod units;

/// Version of the farmgeo library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
