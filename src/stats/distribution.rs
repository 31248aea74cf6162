//! Distribution traits.

/// Moments shared by every probability distribution.
pub trait Distribution {
    /// Mean of the distribution (NaN where undefined).
    fn mean(&self) -> f64;

    /// Variance of the distribution (NaN where undefined).
    fn var(&self) -> f64;

    /// Standard deviation.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }
}

/// A distribution over the real line.
pub trait ContinuousDistribution: Distribution {
    /// Cumulative distribution function P(X <= x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function P(X > x).
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }
}
