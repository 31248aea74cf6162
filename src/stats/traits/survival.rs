//! F-distribution survival function capability.

use crate::stats::{ContinuousDistribution, FDistribution, StatsError, StatsResult};

/// Right-tail probability of the F distribution.
///
/// The ANOVA routines only need `P(F > f | dfn, dfd)`. Taking it through this
/// trait lets callers substitute another evaluator (a lookup table, a
/// higher-precision library, a fixed stub in tests) without touching the
/// sum-of-squares code.
pub trait FSurvival {
    /// Evaluate `P(F > f)` for `F ~ F(dfn, dfd)`.
    fn sf(&self, f: f64, dfn: f64, dfd: f64) -> StatsResult<f64>;
}

/// Default evaluator backed by [`FDistribution::sf`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FDistributionSurvival;

impl FSurvival for FDistributionSurvival {
    fn sf(&self, f: f64, dfn: f64, dfd: f64) -> StatsResult<f64> {
        let dist = FDistribution::new(dfn, dfd)?;
        let p = dist.sf(f);
        if p.is_nan() {
            return Err(StatsError::NumericalError {
                message: format!("F survival function undefined at f = {} ({}, {})", f, dfn, dfd),
            });
        }
        Ok(p)
    }
}
