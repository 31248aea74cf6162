//! Descriptive statistics, the F distribution, and analysis of variance.
//!
//! # Descriptive statistics
//!
//! ```
//! use anova::stats::{mean, std, variance};
//!
//! let x = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&x).unwrap(), 5.0);
//! assert_eq!(variance(&x).unwrap(), 4.0); // population variance
//! assert_eq!(std(&x).unwrap(), 2.0);
//! ```
//!
//! # ANOVA
//!
//! [`one_way_anova`] takes groups of observations directly; [`two_way_anova`]
//! takes a [`Frame`] with two categorical factor columns and a numeric target.
//! Both convert mean squares into p-values through an [`FSurvival`]
//! evaluator, [`FDistributionSurvival`] by default.
//!
//! ```
//! use anova::stats::one_way_anova;
//!
//! let r = one_way_anova(&[[1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]).unwrap();
//! assert_eq!((r.statistic, r.pvalue), (0.0, 1.0));
//! ```

mod helpers;

mod traits;

mod anova;
mod continuous;
mod descriptive;
mod distribution;
mod error;
mod frame;

pub use traits::{
    DescriptiveStats, FDistributionSurvival, FSurvival, OneWayAnovaResult, SumOfSquares,
};

pub use distribution::{ContinuousDistribution, Distribution};
pub use error::{StatsError, StatsResult};

pub use continuous::FDistribution;

pub use anova::{
    AnovaTable, AnovaTerm, RESIDUAL_LABEL, one_way_anova, one_way_anova_with,
    sum_of_squares_between, sum_of_squares_within, total_sum_of_squares, two_way_anova,
    two_way_anova_with,
};
pub use descriptive::{describe, mean, std, variance};
pub use frame::{Column, Frame, Partition};
pub use helpers::flatten;
