//! Terminal formatting of distribution results.

use crate::domain::DistributionResult;

/// Format a result as a short text summary.
pub fn format_distribution(result: &DistributionResult) -> String {
    let mut out = String::new();

    out.push_str("=== retdist - Log-Return Distribution ===\n");
    out.push_str(&format!("Range: {} .. {}\n", result.from_date, result.to_date));
    out.push_str(&format!(
        "Interval: {} ({})\n",
        result.interval,
        result.interval.granularity()
    ));
    out.push_str(&format!("Mean: {:.6}\n", result.mean));
    out.push_str(&format!("Std dev: {:.6}", result.standard_deviation));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Interval;
    use chrono::NaiveDate;

    #[test]
    fn summary_lists_range_interval_and_statistics() {
        let result = DistributionResult {
            from_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            interval: Interval::Weekly,
            mean: 0.001234,
            standard_deviation: 0.0215,
        };
        let text = format_distribution(&result);
        assert!(text.contains("Range: 2024-01-01 .. 2024-03-31"));
        assert!(text.contains("Interval: Weekly (week)"));
        assert!(text.contains("Mean: 0.001234"));
        assert!(text.contains("Std dev: 0.021500"));
    }
}
