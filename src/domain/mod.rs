//! Domain types used throughout the request pipeline.
//!
//! This module defines:
//!
//! - the closed `Interval` enum and the validated `DateRange`
//! - the inbound `DistributionRequest` and outbound `DistributionResult`
//! - the upstream `BarQuery`

pub mod types;

pub use types::*;
