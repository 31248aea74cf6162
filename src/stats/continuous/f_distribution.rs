//! F distribution (Fisher-Snedecor).

use super::special;
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// F distribution (Fisher-Snedecor distribution).
///
/// The F distribution with d1 and d2 degrees of freedom has CDF:
///
/// F(x) = I_{d1*x/(d1*x+d2)}(d1/2, d2/2)
///
/// where I is the regularized incomplete beta function. It is the
/// distribution of the ratio of two independent chi-squared variables, each
/// divided by its degrees of freedom, and therefore the null distribution of
/// an ANOVA F statistic.
///
/// # Examples
///
/// ```
/// use anova::{ContinuousDistribution, FDistribution};
///
/// // Three groups of seven observations: (k - 1, N - k) = (2, 18)
/// let f = FDistribution::new(2.0, 18.0).unwrap();
/// let p_value = f.sf(3.5); // right-tail probability
/// assert!(p_value > 0.0 && p_value < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FDistribution {
    /// Numerator degrees of freedom (d1)
    d1: f64,
    /// Denominator degrees of freedom (d2)
    d2: f64,
}

impl FDistribution {
    /// Create a new F distribution.
    ///
    /// # Arguments
    ///
    /// * `d1` - Numerator degrees of freedom (must be positive and finite)
    /// * `d2` - Denominator degrees of freedom (must be positive and finite)
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidParameter`] if either parameter is not
    /// positive or not finite.
    pub fn new(d1: f64, d2: f64) -> StatsResult<Self> {
        for (name, value) in [("d1", d1), ("d2", d2)] {
            if !value.is_finite() {
                return Err(StatsError::InvalidParameter {
                    name: name.to_string(),
                    value,
                    reason: "must be finite".to_string(),
                });
            }
            if value <= 0.0 {
                return Err(StatsError::InvalidParameter {
                    name: name.to_string(),
                    value,
                    reason: "degrees of freedom must be positive".to_string(),
                });
            }
        }

        Ok(Self { d1, d2 })
    }

    /// Get the numerator degrees of freedom.
    pub fn dfn(&self) -> f64 {
        self.d1
    }

    /// Get the denominator degrees of freedom.
    pub fn dfd(&self) -> f64 {
        self.d2
    }
}

impl Distribution for FDistribution {
    fn mean(&self) -> f64 {
        if self.d2 > 2.0 {
            self.d2 / (self.d2 - 2.0)
        } else {
            f64::NAN
        }
    }

    fn var(&self) -> f64 {
        if self.d2 > 4.0 {
            let num = 2.0 * self.d2 * self.d2 * (self.d1 + self.d2 - 2.0);
            let denom = self.d1 * (self.d2 - 2.0).powi(2) * (self.d2 - 4.0);
            num / denom
        } else {
            f64::NAN
        }
    }
}

impl ContinuousDistribution for FDistribution {
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if x == f64::INFINITY {
            return 1.0;
        }
        // CDF = I_{d1*x/(d1*x+d2)}(d1/2, d2/2)
        let t = self.d1 * x / (self.d1 * x + self.d2);
        special::betainc(self.d1 / 2.0, self.d2 / 2.0, t)
    }

    fn sf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 1.0;
        }
        if x == f64::INFINITY {
            return 0.0;
        }
        // SF = I_{d2/(d1*x+d2)}(d2/2, d1/2)
        let t = self.d2 / (self.d1 * x + self.d2);
        special::betainc(self.d2 / 2.0, self.d1 / 2.0, t)
    }
}
