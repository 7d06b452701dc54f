//! Farm records and derived farm sizes.
//!
//! - [`Farm`]: the record snapshot read from and returned to the caller
//! - [`FarmSizeResolver`]: recorded vs. boundary-derived farm size
//! - [`AggregateHectareCalculator`]: hectare totals across many farms

mod aggregate;
mod record;
mod resolver;

pub use aggregate::{AggregateHectareCalculator, HectareSummary};
pub use record::Farm;
pub use resolver::{FarmSizeResolver, ResolverConfig, SizeProvenance};
