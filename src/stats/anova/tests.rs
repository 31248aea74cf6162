//! Decomposition tests spanning the frame, sum-of-squares and ANOVA modules.

use approx::assert_relative_eq;

use super::*;
use crate::stats::continuous::FDistribution;
use crate::stats::error::StatsError;
use crate::stats::frame::{Column, Frame, Partition};
use crate::stats::helpers::flatten;
use crate::stats::traits::{
    DescriptiveStats, FDistributionSurvival, FSurvival, OneWayAnovaResult, SumOfSquares,
};

/// Balanced 3×2 design with three replicates per cell.
fn fertiliser_trial() -> Frame {
    let cells = [
        ("A", "dry", [12.1, 11.4, 13.0]),
        ("A", "wet", [15.2, 14.8, 16.1]),
        ("B", "dry", [10.3, 9.7, 11.2]),
        ("B", "wet", [18.9, 17.6, 19.4]),
        ("C", "dry", [13.3, 12.2, 12.9]),
        ("C", "wet", [14.1, 15.0, 13.6]),
    ];
    let rows = cells.iter().flat_map(|(brand, soil, ys)| {
        ys.iter().map(move |&y| ([brand.to_string(), soil.to_string()], y))
    });
    Frame::from_rows(&["brand", "soil"], "yield", rows).unwrap()
}

#[test]
fn test_two_way_additivity() {
    let frame = fertiliser_trial();
    let table = two_way_anova(&frame, ["brand", "soil"], "yield").unwrap();
    let tss = total_sum_of_squares(frame.numeric("yield").unwrap()).unwrap();

    assert_relative_eq!(table.total_sum_sq(), tss.sum_sq, max_relative = 1e-10);
    assert_eq!(table.total_df(), tss.df);

    assert_eq!(table.term("brand").unwrap().df, 2);
    assert_eq!(table.term("soil").unwrap().df, 1);
    assert_eq!(table.term("brand:soil").unwrap().df, 2);
    assert_eq!(table.residual().unwrap().df, 12);

    for t in &table.terms()[..3] {
        let p = t.pvalue.unwrap();
        assert!((0.0..=1.0).contains(&p), "{} p = {}", t.label, p);
        assert!(t.statistic.unwrap() >= 0.0);
    }
    // soil dominates this trial
    assert!(table.term("soil").unwrap().pvalue.unwrap() < 1e-4);
}

#[test]
fn test_two_way_factor_matches_one_way_between() {
    let frame = fertiliser_trial();
    let y = frame.numeric("yield").unwrap();
    let table = two_way_anova(&frame, ["brand", "soil"], "yield").unwrap();

    let by_brand = frame.partition(&["brand"]).unwrap().gather(y).unwrap();
    let ssb = sum_of_squares_between(&by_brand).unwrap();
    assert_relative_eq!(
        table.term("brand").unwrap().sum_sq,
        ssb.sum_sq,
        max_relative = 1e-12
    );
}

#[test]
fn test_one_way_over_partition() {
    let frame = fertiliser_trial();
    let y = frame.numeric("yield").unwrap();
    let groups = frame
        .partition(&["brand", "soil"])
        .unwrap()
        .gather(y)
        .unwrap();

    let r = one_way_anova(&groups).unwrap();
    let tss = total_sum_of_squares(&flatten(&groups)).unwrap();
    assert_relative_eq!(
        r.between.sum_sq + r.within.sum_sq,
        tss.sum_sq,
        max_relative = 1e-12
    );
    assert_eq!(r.between.df, 5);
    assert_eq!(r.within.df, 12);
}

#[test]
fn test_survival_receives_term_and_residual_df() {
    struct Recorder(std::cell::RefCell<Vec<(f64, f64)>>);

    impl FSurvival for Recorder {
        fn sf(&self, _f: f64, dfn: f64, dfd: f64) -> crate::stats::StatsResult<f64> {
            self.0.borrow_mut().push((dfn, dfd));
            Ok(0.5)
        }
    }

    let rec = Recorder(Default::default());
    let table = two_way_anova_with(&fertiliser_trial(), ["brand", "soil"], "yield", &rec).unwrap();

    assert_eq!(*rec.0.borrow(), vec![(2.0, 12.0), (1.0, 12.0), (2.0, 12.0)]);
    assert!(table.terms()[..3].iter().all(|t| t.pvalue == Some(0.5)));
}

#[test]
fn test_two_way_display() {
    let table = two_way_anova(&fertiliser_trial(), ["brand", "soil"], "yield").unwrap();
    let text = table.to_string();
    let first_cols: Vec<&str> = text
        .lines()
        .skip(1)
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(first_cols, vec!["brand", "soil", "brand:soil", "residual"]);
}

#[test]
fn test_public_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<AnovaTable>();
    assert_send_sync::<AnovaTerm>();
    assert_send_sync::<OneWayAnovaResult>();
    assert_send_sync::<SumOfSquares>();
    assert_send_sync::<DescriptiveStats>();
    assert_send_sync::<Frame>();
    assert_send_sync::<Column>();
    assert_send_sync::<Partition>();
    assert_send_sync::<FDistribution>();
    assert_send_sync::<FDistributionSurvival>();
    assert_send_sync::<StatsError>();
}

#[cfg(feature = "serde")]
#[test]
fn test_table_serializes() {
    let table = two_way_anova(&fertiliser_trial(), ["brand", "soil"], "yield").unwrap();
    let json = serde_json::to_string(&table).unwrap();
    assert!(json.contains("\"label\":\"brand:soil\""));
    assert!(json.contains("\"pvalue\":null"));
}
