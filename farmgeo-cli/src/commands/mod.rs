//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`area`] - Measure a boundary polygon
//! - [`config`] - Configuration management (path, show, init)
//! - [`resolve`] - Fill in derived farm sizes
//! - [`status`] - Derive farmer lifecycle status
//! - [`total`] - Hectare totals for a set of farms
//! - [`validate`] - Check a boundary polygon

pub mod area;
pub mod config;
pub mod resolve;
pub mod status;
pub mod total;
pub mod validate;
