//! Error types for statistical operations.

use std::fmt;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Invalid parameter or input value.
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Input data is empty when non-empty data is required.
    EmptyData { context: String },

    /// Input data has insufficient length.
    InsufficientData {
        required: usize,
        got: usize,
        context: String,
    },

    /// Numerical computation failed.
    NumericalError { message: String },

    /// Mismatched array lengths.
    LengthMismatch {
        expected: usize,
        got: usize,
        context: String,
    },

    /// A term ended up with zero degrees of freedom and cannot be scaled
    /// into a mean square.
    DegenerateDegreesOfFreedom { term: String, context: String },

    /// The residual mean square is zero while the tested term is not, so the
    /// F statistic is unbounded.
    ZeroVariance { term: String, context: String },

    /// Column lookup failed.
    UnknownColumn { name: String },

    /// Column exists but holds the wrong kind of values.
    ColumnType { name: String, expected: String },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = {}: {}", name, value, reason)
            }
            Self::EmptyData { context } => {
                write!(f, "Empty data in {}", context)
            }
            Self::InsufficientData {
                required,
                got,
                context,
            } => {
                write!(
                    f,
                    "Insufficient data in {}: need {} elements, got {}",
                    context, required, got
                )
            }
            Self::NumericalError { message } => {
                write!(f, "Numerical error: {}", message)
            }
            Self::LengthMismatch {
                expected,
                got,
                context,
            } => {
                write!(
                    f,
                    "Length mismatch in {}: expected {}, got {}",
                    context, expected, got
                )
            }
            Self::DegenerateDegreesOfFreedom { term, context } => {
                write!(
                    f,
                    "Degenerate degrees of freedom in {}: term '{}' has df = 0",
                    context, term
                )
            }
            Self::ZeroVariance { term, context } => {
                write!(
                    f,
                    "Zero residual variance in {}: F statistic for '{}' is unbounded",
                    context, term
                )
            }
            Self::UnknownColumn { name } => {
                write!(f, "Unknown column '{}'", name)
            }
            Self::ColumnType { name, expected } => {
                write!(f, "Column '{}' is not {}", name, expected)
            }
        }
    }
}

impl std::error::Error for StatsError {}
