//! Statistical capability traits and result types.
//!
//! - [`FSurvival`] - the F-distribution tail probability used to turn an F
//!   statistic into a p-value
//! - result records shared across the descriptive and ANOVA modules

mod survival;
mod types;

pub use survival::{FDistributionSurvival, FSurvival};
pub use types::{DescriptiveStats, OneWayAnovaResult, SumOfSquares};
