//! Upstream market-data access.

use crate::domain::BarQuery;
use crate::error::DistributionError;

pub mod polygon;

pub use polygon::{PolygonClient, parse_aggregates};

/// A provider of closing prices for one instrument.
pub trait BarSource {
    /// Fetch the closes for `query`, oldest first. One call, no retries.
    fn fetch_closes(&self, query: &BarQuery) -> Result<Vec<f64>, DistributionError>;
}
