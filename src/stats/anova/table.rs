//! ANOVA table record and its text rendering.

use std::fmt;

use crate::stats::traits::{OneWayAnovaResult, SumOfSquares};

/// Label used for the residual (within-cell) row.
pub const RESIDUAL_LABEL: &str = "residual";

/// One row of an ANOVA table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnovaTerm {
    /// Factor name, `"a:b"` interaction label, or `"residual"`
    pub label: String,
    /// Sum of squares
    pub sum_sq: f64,
    /// Degrees of freedom
    pub df: usize,
    /// F statistic against the residual mean square (`None` for the residual)
    pub statistic: Option<f64>,
    /// P(F > statistic) (`None` for the residual)
    pub pvalue: Option<f64>,
}

impl AnovaTerm {
    pub(crate) fn tested(label: &str, ss: SumOfSquares, statistic: f64, pvalue: f64) -> Self {
        Self {
            label: label.to_string(),
            sum_sq: ss.sum_sq,
            df: ss.df,
            statistic: Some(statistic),
            pvalue: Some(pvalue),
        }
    }

    pub(crate) fn residual(ss: SumOfSquares) -> Self {
        Self {
            label: RESIDUAL_LABEL.to_string(),
            sum_sq: ss.sum_sq,
            df: ss.df,
            statistic: None,
            pvalue: None,
        }
    }

    /// Mean square `sum_sq / df` (`None` when `df == 0`).
    pub fn mean_square(&self) -> Option<f64> {
        SumOfSquares {
            sum_sq: self.sum_sq,
            df: self.df,
        }
        .mean_square()
    }
}

/// Ordered ANOVA table: tested terms followed by the residual row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnovaTable {
    terms: Vec<AnovaTerm>,
}

impl AnovaTable {
    pub(crate) fn new(terms: Vec<AnovaTerm>) -> Self {
        Self { terms }
    }

    /// All rows in order.
    pub fn terms(&self) -> &[AnovaTerm] {
        &self.terms
    }

    /// Row with the given label.
    pub fn term(&self, label: &str) -> Option<&AnovaTerm> {
        self.terms.iter().find(|t| t.label == label)
    }

    /// The residual row.
    pub fn residual(&self) -> Option<&AnovaTerm> {
        self.term(RESIDUAL_LABEL)
    }

    /// Sum of all rows' sums of squares (equals TSS for a full decomposition).
    pub fn total_sum_sq(&self) -> f64 {
        self.terms.iter().map(|t| t.sum_sq).sum()
    }

    /// Sum of all rows' degrees of freedom (equals N - 1 for a full
    /// decomposition).
    pub fn total_df(&self) -> usize {
        self.terms.iter().map(|t| t.df).sum()
    }
}

impl From<&OneWayAnovaResult> for AnovaTable {
    fn from(r: &OneWayAnovaResult) -> Self {
        AnovaTable::new(vec![
            AnovaTerm::tested("between", r.between, r.statistic, r.pvalue),
            AnovaTerm::residual(r.within),
        ])
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:.6}", v),
        None => "NaN".to_string(),
    }
}

impl fmt::Display for AnovaTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .terms
            .iter()
            .map(|t| t.label.len())
            .max()
            .unwrap_or(0)
            .max(RESIDUAL_LABEL.len());

        write!(
            f,
            "{:<width$} {:>14} {:>6} {:>12} {:>12}",
            "",
            "sum_sq",
            "df",
            "F",
            "PR(>F)",
            width = width
        )?;
        for t in &self.terms {
            write!(
                f,
                "\n{:<width$} {:>14.6} {:>6} {:>12} {:>12}",
                t.label,
                t.sum_sq,
                t.df,
                fmt_opt(t.statistic),
                fmt_opt(t.pvalue),
                width = width
            )?;
        }
        Ok(())
    }
}
