//! Descriptive statistics over slices.
//!
//! Variance and standard deviation here are the *population* versions
//! (divisor `N`), matching the textbook definition `VAR(x) = E[(x - E[x])²]`.
//!
//! ```text
//! mean(x)     = (x₁ + x₂ + … + xₙ) / n
//! variance(x) = mean((xᵢ - mean(x))²)
//! std(x)      = √variance(x)
//! ```

use crate::stats::error::StatsResult;
use crate::stats::helpers::validate_sample;
use crate::stats::traits::DescriptiveStats;

/// Arithmetic mean.
///
/// # Errors
///
/// [`StatsError::EmptyData`](crate::StatsError::EmptyData) for an empty slice,
/// [`StatsError::InvalidParameter`](crate::StatsError::InvalidParameter) if any
/// value is NaN or infinite.
pub fn mean(x: &[f64]) -> StatsResult<f64> {
    validate_sample(x, "mean")?;
    Ok(raw_mean(x))
}

/// Population variance (mean of squared deviations from the mean).
pub fn variance(x: &[f64]) -> StatsResult<f64> {
    validate_sample(x, "variance")?;
    Ok(raw_variance(x))
}

/// Population standard deviation.
pub fn std(x: &[f64]) -> StatsResult<f64> {
    validate_sample(x, "std")?;
    Ok(raw_variance(x).sqrt())
}

/// Summary statistics for a sample.
pub fn describe(x: &[f64]) -> StatsResult<DescriptiveStats> {
    validate_sample(x, "describe")?;

    let min = x.iter().copied().fold(f64::INFINITY, f64::min);
    let max = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = raw_variance(x);

    Ok(DescriptiveStats {
        nobs: x.len(),
        min,
        max,
        mean: raw_mean(x),
        variance,
        std: variance.sqrt(),
    })
}

// Unchecked kernels; callers validate first.

pub(crate) fn raw_mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

pub(crate) fn raw_variance(x: &[f64]) -> f64 {
    let m = raw_mean(x);
    x.iter().map(|v| (v - m).powi(2)).sum::<f64>() / x.len() as f64
}
