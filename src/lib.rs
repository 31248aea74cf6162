//! anova - descriptive statistics and analysis of variance
//!
//! Population mean, variance and standard deviation, the sum-of-squares
//! decomposition behind ANOVA, and one-way / two-way F-tests with p-values
//! from the F distribution.
//!
//! # Modules
//!
//! - [`stats`] - descriptive statistics, [`FDistribution`], [`Frame`]
//!   (tabular input with group-by), one-way and two-way ANOVA
//!
//! # Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `serde` | `Serialize`/`Deserialize` for result types | serde |
//!
//! # Example
//!
//! ```
//! use anova::{Frame, two_way_anova};
//!
//! let frame = Frame::new()
//!     .with_categorical("age", ["young", "young", "young", "young", "old", "old", "old", "old"])
//!     .unwrap()
//!     .with_categorical("dose", ["low", "low", "high", "high", "low", "low", "high", "high"])
//!     .unwrap()
//!     .with_numeric("expr", vec![1.0, 3.0, 5.0, 7.0, 2.0, 4.0, 10.0, 12.0])
//!     .unwrap();
//!
//! let table = two_way_anova(&frame, ["age", "dose"], "expr").unwrap();
//! println!("{}", table);
//! ```

pub mod stats;

pub use stats::{
    AnovaTable, AnovaTerm, Column, ContinuousDistribution, DescriptiveStats, Distribution,
    FDistribution, FDistributionSurvival, FSurvival, Frame, OneWayAnovaResult, Partition,
    StatsError, StatsResult, SumOfSquares, describe, mean, one_way_anova, one_way_anova_with,
    std, sum_of_squares_between, sum_of_squares_within, total_sum_of_squares, two_way_anova,
    two_way_anova_with, variance,
};
