//! Sum-of-squares decomposition.
//!
//! ```text
//! TSS = Σᵢ (yᵢ - ȳ)²                 df = N - 1
//! SSB = Σⱼ nⱼ (ȳⱼ - ȳ)²              df = k - 1
//! SSW = Σⱼ Σᵢ (yᵢⱼ - ȳⱼ)²            df = Σⱼ (nⱼ - 1) = N - k
//! ```
//!
//! For any partition of a sample into groups, `TSS = SSB + SSW`.

use crate::stats::descriptive::raw_mean;
use crate::stats::error::StatsResult;
use crate::stats::helpers::{flatten, validate_groups, validate_sample};
use crate::stats::traits::SumOfSquares;

/// Total sum of squares of a vector about its own mean.
pub fn total_sum_of_squares(x: &[f64]) -> StatsResult<SumOfSquares> {
    validate_sample(x, "total_sum_of_squares")?;
    Ok(SumOfSquares {
        sum_sq: raw_tss(x),
        df: x.len() - 1,
    })
}

/// Between-group sum of squares: group sizes times squared deviations of the
/// group means from the grand mean.
pub fn sum_of_squares_between<G: AsRef<[f64]>>(groups: &[G]) -> StatsResult<SumOfSquares> {
    validate_groups(groups, 1, "sum_of_squares_between")?;

    let grand_mean = raw_mean(&flatten(groups));
    let sum_sq = groups
        .iter()
        .map(|g| {
            let g = g.as_ref();
            g.len() as f64 * (raw_mean(g) - grand_mean).powi(2)
        })
        .sum();

    Ok(SumOfSquares {
        sum_sq,
        df: groups.len() - 1,
    })
}

/// Within-group sum of squares: each group's total sum of squares about its
/// own mean, summed.
pub fn sum_of_squares_within<G: AsRef<[f64]>>(groups: &[G]) -> StatsResult<SumOfSquares> {
    validate_groups(groups, 1, "sum_of_squares_within")?;

    let sum_sq = groups.iter().map(|g| raw_tss(g.as_ref())).sum();
    let df = groups.iter().map(|g| g.as_ref().len() - 1).sum();

    Ok(SumOfSquares { sum_sq, df })
}

pub(crate) fn raw_tss(x: &[f64]) -> f64 {
    let m = raw_mean(x);
    x.iter().map(|v| (v - m).powi(2)).sum()
}
