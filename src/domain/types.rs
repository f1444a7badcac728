//! Request/response value objects.
//!
//! Everything here is request-scoped: built when a request arrives and dropped
//! once the response has been written.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DistributionError;

/// Sampling interval of the upstream bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub const ALL: [Interval; 3] = [Interval::Daily, Interval::Weekly, Interval::Monthly];

    pub fn name(self) -> &'static str {
        match self {
            Interval::Daily => "Daily",
            Interval::Weekly => "Weekly",
            Interval::Monthly => "Monthly",
        }
    }

    /// Path segment the aggregates endpoint expects for this interval.
    pub fn granularity(self) -> &'static str {
        match self {
            Interval::Daily => "day",
            Interval::Weekly => "week",
            Interval::Monthly => "month",
        }
    }

    /// Names of all recognized intervals, in declaration order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|i| i.name()).collect()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interval {
    type Err = DistributionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Interval::Daily),
            "weekly" => Ok(Interval::Weekly),
            "monthly" => Ok(Interval::Monthly),
            _ => Err(DistributionError::InvalidInterval {
                value: value.to_string(),
            }),
        }
    }
}

/// Inclusive calendar range with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, DistributionError> {
        if from > to {
            return Err(DistributionError::InvalidRange {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }
}

/// Inbound request body.
///
/// `interval` stays a raw string so that unknown names are reported as an
/// invalid interval instead of a JSON decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRequest {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub interval: String,
}

/// Mean and population standard deviation of the log returns over a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResult {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub interval: Interval,
    pub mean: f64,
    pub standard_deviation: f64,
}

/// Query parameters for one upstream bar request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarQuery {
    pub granularity: &'static str,
    pub from: String,
    pub to: String,
}

impl BarQuery {
    pub fn new(range: &DateRange, interval: Interval) -> Self {
        Self {
            granularity: interval.granularity(),
            from: range.from().format("%Y-%m-%d").to_string(),
            to: range.to().format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn interval_parses_case_insensitively() {
        assert_eq!("Daily".parse::<Interval>().unwrap(), Interval::Daily);
        assert_eq!(" weekly ".parse::<Interval>().unwrap(), Interval::Weekly);
        assert_eq!("MONTHLY".parse::<Interval>().unwrap(), Interval::Monthly);
    }

    #[test]
    fn unknown_interval_is_rejected() {
        let err = "Hourly".parse::<Interval>().unwrap_err();
        assert_eq!(
            err,
            DistributionError::InvalidInterval {
                value: "Hourly".to_string()
            }
        );
    }

    #[test]
    fn interval_maps_to_granularity() {
        assert_eq!(Interval::Daily.granularity(), "day");
        assert_eq!(Interval::Weekly.granularity(), "week");
        assert_eq!(Interval::Monthly.granularity(), "month");
        assert_eq!(Interval::names(), vec!["Daily", "Weekly", "Monthly"]);
    }

    #[test]
    fn date_range_rejects_inverted_bounds() {
        let err = DateRange::new(date(2024, 3, 1), date(2024, 2, 1)).unwrap_err();
        assert!(matches!(err, DistributionError::InvalidRange { .. }));

        // Same-day ranges are allowed.
        assert!(DateRange::new(date(2024, 3, 1), date(2024, 3, 1)).is_ok());
    }

    #[test]
    fn bar_query_uses_iso_dates() {
        let range = DateRange::new(date(2024, 1, 2), date(2024, 12, 31)).unwrap();
        let q = BarQuery::new(&range, Interval::Weekly);
        assert_eq!(q.granularity, "week");
        assert_eq!(q.from, "2024-01-02");
        assert_eq!(q.to, "2024-12-31");
    }

    #[test]
    fn result_serializes_in_camel_case() {
        let result = DistributionResult {
            from_date: date(2024, 1, 1),
            to_date: date(2024, 6, 30),
            interval: Interval::Monthly,
            mean: 0.5,
            standard_deviation: 0.25,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["fromDate"], "2024-01-01");
        assert_eq!(json["toDate"], "2024-06-30");
        assert_eq!(json["interval"], "Monthly");
        assert_eq!(json["standardDeviation"], 0.25);
    }

    #[test]
    fn request_keeps_raw_interval() {
        let req: DistributionRequest = serde_json::from_str(
            r#"{"fromDate":"2024-01-01","toDate":"2024-02-01","interval":"Quarterly"}"#,
        )
        .unwrap();
        assert_eq!(req.interval, "Quarterly");
        assert_eq!(req.from_date, date(2024, 1, 1));
    }
}
