//! Log-return statistics over a closing-price series.
//!
//! Returns are computed with a baseline of 1 for the first observation:
//!
//! ```text
//! r[0] = ln(p[0])
//! r[i] = ln(p[i]) - ln(p[i-1])     for i >= 1
//! ```
//!
//! so the return series has the same length as the price series, with the first
//! element on a different scale than the rest. Consumers that rely on the
//! published mean/deviation depend on this convention, so it is kept as is.
//!
//! The standard deviation is the **population** one (divisor `n`).
//!
//! Precondition: every price is strictly positive. Non-positive prices are not
//! rejected and produce NaN/-inf.

use crate::error::DistributionError;

/// Summary of a return series computed in a single pass over the prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnSummary {
    pub mean: f64,
    pub standard_deviation: f64,
    /// Number of returns (equal to the number of prices).
    pub count: usize,
}

/// Log returns of `prices`, same length as the input.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>, DistributionError> {
    let (first, rest) = prices.split_first().ok_or(DistributionError::EmptyData)?;

    let mut out = Vec::with_capacity(prices.len());
    out.push(first.ln());
    for (i, p) in rest.iter().enumerate() {
        // `prices[i]` is the predecessor of `rest[i]`.
        out.push(p.ln() - prices[i].ln());
    }
    Ok(out)
}

/// Arithmetic mean of the log returns.
pub fn mean(prices: &[f64]) -> Result<f64, DistributionError> {
    let returns = log_returns(prices)?;
    Ok(average(&returns))
}

/// Population standard deviation of the log returns.
pub fn standard_deviation(prices: &[f64]) -> Result<f64, DistributionError> {
    let returns = log_returns(prices)?;
    Ok(population_std(&returns, average(&returns)))
}

/// Mean and standard deviation from one return computation.
pub fn summarize(prices: &[f64]) -> Result<ReturnSummary, DistributionError> {
    let returns = log_returns(prices)?;
    let mean = average(&returns);
    Ok(ReturnSummary {
        mean,
        standard_deviation: population_std(&returns, mean),
        count: returns.len(),
    })
}

fn average(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn population_std(xs: &[f64], mean: f64) -> f64 {
    let sum_sq = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    (sum_sq / xs.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::E;

    const TOL: f64 = 1e-12;

    #[test]
    fn returns_keep_length_and_first_element_is_absolute_log() {
        let prices = [101.5, 99.2, 104.8, 104.8, 110.0];
        let r = log_returns(&prices).unwrap();
        assert_eq!(r.len(), prices.len());
        assert_eq!(r[0], 101.5_f64.ln());
        assert!((r[2] - (104.8_f64.ln() - 99.2_f64.ln())).abs() < TOL);
        assert!(r[3].abs() < TOL);
    }

    #[test]
    fn single_unit_price_has_zero_mean_and_deviation() {
        assert_eq!(mean(&[1.0]).unwrap(), 0.0);
        assert_eq!(standard_deviation(&[1.0]).unwrap(), 0.0);
    }

    #[test]
    fn exponential_prices_have_unit_returns() {
        let prices = [E, E * E];
        let r = log_returns(&prices).unwrap();
        assert!((r[0] - 1.0).abs() < TOL);
        assert!((r[1] - 1.0).abs() < TOL);
        assert!((mean(&prices).unwrap() - 1.0).abs() < TOL);
        assert!(standard_deviation(&prices).unwrap().abs() < 1e-7);
    }

    #[test]
    fn unit_baseline_series() {
        // Returns are [0, 1, 1]: mean 2/3, population variance 2/9.
        let prices = [1.0, E, E * E];
        let r = log_returns(&prices).unwrap();
        assert_eq!(r[0], 0.0);
        assert!((r[1] - 1.0).abs() < TOL);
        assert!((r[2] - 1.0).abs() < TOL);
        assert!((mean(&prices).unwrap() - 2.0 / 3.0).abs() < TOL);
        assert!((standard_deviation(&prices).unwrap() - (2.0_f64 / 9.0).sqrt()).abs() < TOL);
    }

    #[test]
    fn deviation_uses_population_divisor() {
        // Returns are [0, 1, 2]: mean 1, squared deviations sum to 2.
        // Divisor n gives sqrt(2/3); divisor n-1 would give exactly 1.
        let prices = [1.0, E, E.powi(3)];
        let sd = standard_deviation(&prices).unwrap();
        assert!((sd - (2.0_f64 / 3.0).sqrt()).abs() < TOL);
        assert!((sd - 1.0).abs() > 0.1);
    }

    #[test]
    fn empty_series_is_rejected() {
        assert_eq!(log_returns(&[]), Err(DistributionError::EmptyData));
        assert_eq!(mean(&[]), Err(DistributionError::EmptyData));
        assert_eq!(standard_deviation(&[]), Err(DistributionError::EmptyData));
        assert_eq!(summarize(&[]), Err(DistributionError::EmptyData));
    }

    #[test]
    fn summary_matches_individual_statistics() {
        let prices = [187.15, 185.64, 184.25, 181.91, 181.18, 185.56, 185.14];
        let s = summarize(&prices).unwrap();
        assert_eq!(s.count, prices.len());
        assert_eq!(s.mean, mean(&prices).unwrap());
        assert_eq!(s.standard_deviation, standard_deviation(&prices).unwrap());
    }
}
