// File: crates/geothermal-report/src/stats.rs
// Summary: Derived statistics: mean, compound annual growth rate and element-wise ratios.

use crate::error::StatsError;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySeries);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Compound annual growth rate between the first and last values,
/// `(last / first)^(1 / (n - 1)) - 1`, one period per step.
pub fn cagr(values: &[f64]) -> Result<f64, StatsError> {
    let (first, last) = match values {
        [] => return Err(StatsError::EmptySeries),
        [_] => return Err(StatsError::TooFewPoints(1)),
        [first, .., last] => (*first, *last),
    };
    if first == 0.0 {
        return Err(StatsError::ZeroBaseline);
    }
    let periods = (values.len() - 1) as f64;
    Ok((last / first).powf(1.0 / periods) - 1.0)
}

fn check_lengths(left: &[f64], right: &[f64]) -> Result<(), StatsError> {
    if left.len() != right.len() {
        return Err(StatsError::LengthMismatch { left: left.len(), right: right.len() });
    }
    if left.is_empty() {
        return Err(StatsError::EmptySeries);
    }
    Ok(())
}

/// `numerator[i] / denominator[i]` for every index.
pub fn ratios(numerator: &[f64], denominator: &[f64]) -> Result<Vec<f64>, StatsError> {
    check_lengths(numerator, denominator)?;
    Ok(numerator.iter().zip(denominator).map(|(n, d)| n / d).collect())
}

/// `numerator[i] / denominator[i]` for indices whose denominator is strictly positive.
/// Zero or negative denominators (no or lost capacity) are skipped.
pub fn positive_ratios(numerator: &[f64], denominator: &[f64]) -> Result<Vec<f64>, StatsError> {
    check_lengths(numerator, denominator)?;
    Ok(numerator
        .iter()
        .zip(denominator)
        .filter(|(_, d)| **d > 0.0)
        .map(|(n, d)| n / d)
        .collect())
}

/// Share of `potential` that is `installed`, in percent.
pub fn percent_of(installed: f64, potential: f64) -> Option<f64> {
    (potential != 0.0).then(|| installed / potential * 100.0)
}
