//! Result types for statistical algorithms.

/// A sum of squares paired with its degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SumOfSquares {
    /// Sum of squared deviations
    pub sum_sq: f64,
    /// Degrees of freedom
    pub df: usize,
}

impl SumOfSquares {
    /// Mean square `sum_sq / df`, or `None` when `df == 0`.
    pub fn mean_square(&self) -> Option<f64> {
        if self.df == 0 {
            None
        } else {
            Some(self.sum_sq / self.df as f64)
        }
    }
}

/// Summary statistics of a sample (population variance).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescriptiveStats {
    /// Number of observations
    pub nobs: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance (divisor N)
    pub variance: f64,
    /// Population standard deviation
    pub std: f64,
}

/// Result of a one-way ANOVA.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneWayAnovaResult {
    /// F statistic
    pub statistic: f64,
    /// P(F > statistic) under the null hypothesis of equal means
    pub pvalue: f64,
    /// Between-group sum of squares, df = k - 1
    pub between: SumOfSquares,
    /// Within-group sum of squares, df = N - k
    pub within: SumOfSquares,
}
