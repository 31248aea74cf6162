//! One-way ANOVA.

use log::debug;

use super::f_test;
use super::sum_of_squares::{sum_of_squares_between, sum_of_squares_within};
use crate::stats::error::StatsResult;
use crate::stats::helpers::validate_groups;
use crate::stats::traits::{FDistributionSurvival, FSurvival, OneWayAnovaResult};

const CONTEXT: &str = "one_way_anova";

/// One-way ANOVA F-test over two or more groups.
///
/// # Errors
///
/// - [`StatsError::InsufficientData`](crate::StatsError::InsufficientData)
///   with fewer than two groups
/// - [`StatsError::EmptyData`](crate::StatsError::EmptyData) if any group is
///   empty
/// - [`StatsError::DegenerateDegreesOfFreedom`](crate::StatsError::DegenerateDegreesOfFreedom)
///   if every group has a single observation (within df = 0)
/// - [`StatsError::ZeroVariance`](crate::StatsError::ZeroVariance) if the
///   groups have no spread but different means
///
/// # Examples
///
/// ```
/// use anova::one_way_anova;
///
/// let r = one_way_anova(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
/// assert!((r.statistic - 27.0).abs() < 1e-10);
/// assert!((r.pvalue - 0.001).abs() < 1e-10);
/// ```
pub fn one_way_anova<G: AsRef<[f64]>>(groups: &[G]) -> StatsResult<OneWayAnovaResult> {
    one_way_anova_with(groups, &FDistributionSurvival)
}

/// [`one_way_anova`] with a caller-supplied F survival function.
pub fn one_way_anova_with<G, S>(groups: &[G], survival: &S) -> StatsResult<OneWayAnovaResult>
where
    G: AsRef<[f64]>,
    S: FSurvival + ?Sized,
{
    validate_groups(groups, 2, CONTEXT)?;

    let between = sum_of_squares_between(groups)?;
    let within = sum_of_squares_within(groups)?;
    debug!(
        "{}: k={} ssb={} (df {}) ssw={} (df {})",
        CONTEXT,
        groups.len(),
        between.sum_sq,
        between.df,
        within.sum_sq,
        within.df
    );

    let (statistic, pvalue) = f_test(between, within, "between", CONTEXT, survival)?;
    debug!("{}: F={} p={}", CONTEXT, statistic, pvalue);

    Ok(OneWayAnovaResult {
        statistic,
        pvalue,
        between,
        within,
    })
}
