//! Shared "distribution pipeline" used by every front-end.
//!
//! validate range + interval -> upstream fetch -> log-return statistics -> result
//!
//! Validation happens before the source is touched, so a bad request never
//! costs an upstream call.

use chrono::NaiveDate;

use crate::data::BarSource;
use crate::domain::{BarQuery, DateRange, DistributionRequest, DistributionResult, Interval};
use crate::error::DistributionError;

/// Compute the log-return distribution for `interval` over `[from_date, to_date]`.
pub fn compute_distribution<S: BarSource + ?Sized>(
    source: &S,
    from_date: NaiveDate,
    to_date: NaiveDate,
    interval: &str,
) -> Result<DistributionResult, DistributionError> {
    let range = DateRange::new(from_date, to_date)?;
    let interval: Interval = interval.parse()?;
    let query = BarQuery::new(&range, interval);

    let closes = source.fetch_closes(&query)?;
    if closes.is_empty() {
        tracing::warn!(from = %query.from, to = %query.to, "Upstream returned no bars.");
        return Err(DistributionError::EmptyData);
    }

    let summary = crate::math::summarize(&closes)?;
    tracing::debug!(returns = summary.count, mean = summary.mean, "Computed distribution.");

    Ok(DistributionResult {
        from_date: range.from(),
        to_date: range.to(),
        interval,
        mean: summary.mean,
        standard_deviation: summary.standard_deviation,
    })
}

/// Same as [`compute_distribution`], taking a decoded request body.
pub fn run_request<S: BarSource + ?Sized>(
    source: &S,
    request: &DistributionRequest,
) -> Result<DistributionResult, DistributionError> {
    compute_distribution(source, request.from_date, request.to_date, &request.interval)
}
