//! Continuous probability distributions.

mod f_distribution;

pub use f_distribution::FDistribution;

/// Helper module for special functions used in distributions.
pub(crate) mod special {
    use statrs::function::beta as sr_beta;

    /// Regularized incomplete beta function: I_x(a, b)
    ///
    /// Returns NaN outside the domain `a > 0`, `b > 0`, `0 <= x <= 1`.
    pub fn betainc(a: f64, b: f64, x: f64) -> f64 {
        sr_beta::checked_beta_reg(a, b, x).unwrap_or(f64::NAN)
    }

}
