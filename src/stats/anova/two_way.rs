//! Two-way (factorial) ANOVA with interaction.

use log::{debug, trace};

use super::f_test;
use super::sum_of_squares::{sum_of_squares_between, sum_of_squares_within, total_sum_of_squares};
use super::table::{AnovaTable, AnovaTerm, RESIDUAL_LABEL};
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::frame::Frame;
use crate::stats::helpers::validate_sample;
use crate::stats::traits::{FDistributionSurvival, FSurvival, SumOfSquares};

const CONTEXT: &str = "two_way_anova";

/// Relative size below which a negative interaction residue counts as rounding.
const INTERACTION_RTOL: f64 = 1e-12;

/// Two-way ANOVA of `target` over the factors `[a, b]` of `frame`.
///
/// Returns rows in the order `a`, `b`, `a:b`, `residual`. Each factor's df is
/// its number of levels minus one; the interaction df is their product; the
/// residual df is the number of rows minus the number of non-empty A×B cells.
/// The row dfs sum to N - 1 only for a complete design, where every A×B cell
/// holds at least one row. With empty cells the interaction df overstates the
/// true value.
///
/// # Errors
///
/// - [`StatsError::UnknownColumn`] / [`StatsError::ColumnType`] for a missing
///   column or one of the wrong kind
/// - [`StatsError::InvalidParameter`] if both factors are the same column
/// - [`StatsError::EmptyData`] for a frame without rows
/// - [`StatsError::DegenerateDegreesOfFreedom`] if a factor has a single level
///   or every cell holds a single observation
/// - [`StatsError::ZeroVariance`] if the cells have no spread but a term does
/// - [`StatsError::NumericalError`] if the interaction sum of squares comes
///   out negative (a strongly unbalanced design)
///
/// # Examples
///
/// ```
/// use anova::{two_way_anova, Frame};
///
/// let frame = Frame::from_rows(
///     &["age", "dose"],
///     "expr",
///     [
///         (["young", "low"], 1.0),
///         (["young", "low"], 3.0),
///         (["young", "high"], 5.0),
///         (["young", "high"], 7.0),
///         (["old", "low"], 2.0),
///         (["old", "low"], 4.0),
///         (["old", "high"], 10.0),
///         (["old", "high"], 12.0),
///     ],
/// )
/// .unwrap();
///
/// let table = two_way_anova(&frame, ["age", "dose"], "expr").unwrap();
/// assert!((table.term("dose").unwrap().sum_sq - 72.0).abs() < 1e-10);
/// assert!((table.term("age:dose").unwrap().statistic.unwrap() - 4.0).abs() < 1e-10);
/// ```
pub fn two_way_anova(frame: &Frame, factors: [&str; 2], target: &str) -> StatsResult<AnovaTable> {
    two_way_anova_with(frame, factors, target, &FDistributionSurvival)
}

/// [`two_way_anova`] with a caller-supplied F survival function.
pub fn two_way_anova_with<S>(
    frame: &Frame,
    factors: [&str; 2],
    target: &str,
    survival: &S,
) -> StatsResult<AnovaTable>
where
    S: FSurvival + ?Sized,
{
    let [a, b] = factors;
    if a == b {
        return Err(StatsError::InvalidParameter {
            name: "factors".to_string(),
            value: f64::NAN,
            reason: format!("factors must be distinct columns, got '{}' twice", a),
        });
    }

    let y = frame.numeric(target)?;
    validate_sample(y, CONTEXT)?;
    let total = total_sum_of_squares(y)?;

    // Main effects: one partition per factor
    let mut effects = Vec::with_capacity(2);
    for factor in factors {
        let levels = frame.partition(&[factor])?.gather(y)?;
        let ss = sum_of_squares_between(&levels)?;
        if ss.df == 0 {
            return Err(StatsError::DegenerateDegreesOfFreedom {
                term: factor.to_string(),
                context: CONTEXT.to_string(),
            });
        }
        trace!("{}: factor '{}' levels={} ss={}", CONTEXT, factor, levels.len(), ss.sum_sq);
        effects.push(ss);
    }

    // Residual: within the A×B cells
    let cells = frame.partition(&factors)?.gather(y)?;
    let residual = sum_of_squares_within(&cells)?;
    if residual.df == 0 {
        return Err(StatsError::DegenerateDegreesOfFreedom {
            term: RESIDUAL_LABEL.to_string(),
            context: CONTEXT.to_string(),
        });
    }

    let interaction_label = format!("{}:{}", a, b);
    let interaction = interaction_term(total, &effects, residual, &interaction_label)?;

    debug!(
        "{}: tss={} ss_{}={} ss_{}={} ss_{}={} ss_resid={} (cells={}, df_resid={})",
        CONTEXT,
        total.sum_sq,
        a,
        effects[0].sum_sq,
        b,
        effects[1].sum_sq,
        interaction_label,
        interaction.sum_sq,
        residual.sum_sq,
        cells.len(),
        residual.df
    );

    let mut terms = Vec::with_capacity(4);
    for (label, ss) in [
        (a, effects[0]),
        (b, effects[1]),
        (interaction_label.as_str(), interaction),
    ] {
        let (statistic, pvalue) = f_test(ss, residual, label, CONTEXT, survival)?;
        terms.push(AnovaTerm::tested(label, ss, statistic, pvalue));
    }
    terms.push(AnovaTerm::residual(residual));

    Ok(AnovaTable::new(terms))
}

/// `TSS - Σ SS_factor - SS_resid`, with df the product of the factor dfs.
fn interaction_term(
    total: SumOfSquares,
    effects: &[SumOfSquares],
    residual: SumOfSquares,
    label: &str,
) -> StatsResult<SumOfSquares> {
    let explained: f64 = effects.iter().map(|e| e.sum_sq).sum();
    let mut sum_sq = total.sum_sq - explained - residual.sum_sq;

    if sum_sq < 0.0 {
        if -sum_sq <= INTERACTION_RTOL * total.sum_sq.max(f64::MIN_POSITIVE) {
            sum_sq = 0.0;
        } else {
            return Err(StatsError::NumericalError {
                message: format!(
                    "negative sum of squares {} for interaction '{}' (unbalanced design?)",
                    sum_sq, label
                ),
            });
        }
    }

    Ok(SumOfSquares {
        sum_sq,
        df: effects.iter().map(|e| e.df).product(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced() -> Frame {
        Frame::from_rows(
            &["age", "dose"],
            "expr",
            [
                (["young", "low"], 1.0),
                (["young", "low"], 3.0),
                (["young", "high"], 5.0),
                (["young", "high"], 7.0),
                (["old", "low"], 2.0),
                (["old", "low"], 4.0),
                (["old", "high"], 10.0),
                (["old", "high"], 12.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_balanced_2x2() {
        let table = two_way_anova(&balanced(), ["age", "dose"], "expr").unwrap();
        let labels: Vec<&str> = table.terms().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["age", "dose", "age:dose", "residual"]);

        let age = table.term("age").unwrap();
        assert!((age.sum_sq - 18.0).abs() < 1e-10);
        assert_eq!(age.df, 1);
        assert!((age.statistic.unwrap() - 9.0).abs() < 1e-10);
        assert!((age.pvalue.unwrap() - 0.039_941_968_071_719).abs() < 1e-9);

        let dose = table.term("dose").unwrap();
        assert!((dose.sum_sq - 72.0).abs() < 1e-10);
        assert!((dose.statistic.unwrap() - 36.0).abs() < 1e-10);
        assert!((dose.pvalue.unwrap() - 0.003_882_537_046_961).abs() < 1e-9);

        let inter = table.term("age:dose").unwrap();
        assert!((inter.sum_sq - 8.0).abs() < 1e-10);
        assert_eq!(inter.df, 1);
        assert!((inter.statistic.unwrap() - 4.0).abs() < 1e-10);
        assert!((inter.pvalue.unwrap() - 0.116_116_523_516_816).abs() < 1e-9);

        let resid = table.residual().unwrap();
        assert!((resid.sum_sq - 8.0).abs() < 1e-10);
        assert_eq!(resid.df, 4);
        assert!(resid.statistic.is_none());
    }

    #[test]
    fn test_factor_order_swaps_rows() {
        let table = two_way_anova(&balanced(), ["dose", "age"], "expr").unwrap();
        assert_eq!(table.terms()[0].label, "dose");
        assert_eq!(table.terms()[2].label, "dose:age");
        assert!((table.terms()[2].sum_sq - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_column_errors() {
        let frame = balanced();
        assert!(matches!(
            two_way_anova(&frame, ["age", "sex"], "expr"),
            Err(StatsError::UnknownColumn { .. })
        ));
        assert!(matches!(
            two_way_anova(&frame, ["age", "dose"], "age"),
            Err(StatsError::ColumnType { .. })
        ));
        assert!(matches!(
            two_way_anova(&frame, ["age", "expr"], "expr"),
            Err(StatsError::ColumnType { .. })
        ));
        assert!(matches!(
            two_way_anova(&frame, ["age", "age"], "expr"),
            Err(StatsError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_empty_frame() {
        let frame = Frame::new()
            .with_categorical("a", Vec::<String>::new())
            .unwrap()
            .with_categorical("b", Vec::<String>::new())
            .unwrap()
            .with_numeric("y", vec![])
            .unwrap();
        assert!(matches!(
            two_way_anova(&frame, ["a", "b"], "y"),
            Err(StatsError::EmptyData { .. })
        ));
    }

    #[test]
    fn test_single_level_factor() {
        let frame = Frame::from_rows(
            &["a", "b"],
            "y",
            [
                (["x", "p"], 1.0),
                (["x", "p"], 2.0),
                (["x", "q"], 3.0),
                (["x", "q"], 5.0),
            ],
        )
        .unwrap();
        match two_way_anova(&frame, ["a", "b"], "y") {
            Err(StatsError::DegenerateDegreesOfFreedom { term, .. }) => assert_eq!(term, "a"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_unreplicated_cells() {
        let frame = Frame::from_rows(
            &["a", "b"],
            "y",
            [
                (["x", "p"], 1.0),
                (["x", "q"], 2.0),
                (["z", "p"], 3.0),
                (["z", "q"], 5.0),
            ],
        )
        .unwrap();
        match two_way_anova(&frame, ["a", "b"], "y") {
            Err(StatsError::DegenerateDegreesOfFreedom { term, .. }) => {
                assert_eq!(term, RESIDUAL_LABEL)
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_empty_cell_df() {
        // (z, q) has no rows: 3 non-empty cells out of 4
        let frame = Frame::from_rows(
            &["a", "b"],
            "y",
            [
                (["x", "p"], 1.0),
                (["x", "p"], 2.0),
                (["x", "q"], 4.0),
                (["x", "q"], 6.0),
                (["z", "p"], 3.0),
                (["z", "p"], 5.0),
            ],
        )
        .unwrap();
        let table = two_way_anova(&frame, ["a", "b"], "y").unwrap();

        assert_eq!(table.term("a:b").unwrap().df, 1);
        assert_eq!(table.residual().unwrap().df, 3);
        // one more than N - 1
        assert_eq!(table.total_df(), 6);
    }

    #[test]
    fn test_interaction_rounding_clamped() {
        let total = SumOfSquares { sum_sq: 100.0, df: 7 };
        let effects = [
            SumOfSquares { sum_sq: 60.0, df: 1 },
            SumOfSquares { sum_sq: 30.0, df: 1 },
        ];
        let residual = SumOfSquares {
            sum_sq: 10.0 + 1e-13,
            df: 4,
        };
        let inter = interaction_term(total, &effects, residual, "a:b").unwrap();
        assert_eq!(inter.sum_sq, 0.0);
        assert_eq!(inter.df, 1);

        let residual = SumOfSquares { sum_sq: 15.0, df: 4 };
        assert!(matches!(
            interaction_term(total, &effects, residual, "a:b"),
            Err(StatsError::NumericalError { .. })
        ));
    }
}
