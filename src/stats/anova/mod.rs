//! Analysis of variance.
//!
//! # One-way
//!
//! Compares the means of k independent groups. Under H₀ (all means equal)
//!
//! ```text
//! F = (SSB / (k - 1)) / (SSW / (N - k))  ~  F(k - 1, N - k)
//! ```
//!
//! # Two-way
//!
//! Two categorical factors A and B over a numeric target. Each factor's
//! between-level sum of squares is computed on its own; the residual is the
//! within-cell sum of squares of the A×B cross; the interaction is what is
//! left of the total:
//!
//! ```text
//! SS_AB = TSS - SS_A - SS_B - SS_resid      df_AB = df_A · df_B
//! ```
//!
//! The subtraction form of the interaction is exact for balanced designs
//! (equal replication in every cell).
//!
//! # P-values
//!
//! Every term is tested against the residual mean square through an
//! [`FSurvival`] evaluator; the `_with` variants accept a caller-supplied one.

mod one_way;
mod sum_of_squares;
mod table;
mod two_way;

#[cfg(test)]
mod tests;

pub use one_way::{one_way_anova, one_way_anova_with};
pub use sum_of_squares::{sum_of_squares_between, sum_of_squares_within, total_sum_of_squares};
pub use table::{AnovaTable, AnovaTerm, RESIDUAL_LABEL};
pub use two_way::{two_way_anova, two_way_anova_with};

use crate::stats::error::{StatsError, StatsResult};
use crate::stats::traits::{FSurvival, SumOfSquares};

/// F statistic and p-value of `term` against `residual`.
///
/// A zero term mean square yields `(0, 1)` without consulting `survival`;
/// a zero residual mean square under a non-zero term is an error.
pub(crate) fn f_test<S: FSurvival + ?Sized>(
    term: SumOfSquares,
    residual: SumOfSquares,
    label: &str,
    context: &str,
    survival: &S,
) -> StatsResult<(f64, f64)> {
    let ms_term = term
        .mean_square()
        .ok_or_else(|| StatsError::DegenerateDegreesOfFreedom {
            term: label.to_string(),
            context: context.to_string(),
        })?;
    let ms_resid = residual
        .mean_square()
        .ok_or_else(|| StatsError::DegenerateDegreesOfFreedom {
            term: RESIDUAL_LABEL.to_string(),
            context: context.to_string(),
        })?;

    if ms_term == 0.0 {
        return Ok((0.0, 1.0));
    }
    if ms_resid == 0.0 {
        return Err(StatsError::ZeroVariance {
            term: label.to_string(),
            context: context.to_string(),
        });
    }

    let statistic = ms_term / ms_resid;
    let pvalue = survival.sf(statistic, term.df as f64, residual.df as f64)?;
    Ok((statistic, pvalue))
}
