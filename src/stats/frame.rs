//! Minimal column-oriented table for factorial designs.
//!
//! A [`Frame`] holds named columns of equal length. Categorical columns carry
//! factor levels; numeric columns carry observations. Grouping is done in two
//! explicit steps: [`Frame::partition`] maps each distinct key tuple to the row
//! indices that carry it, and [`Partition::reduce`] / [`Partition::gather`]
//! fold a numeric column over those rows.
//!
//! ```
//! use anova::Frame;
//!
//! let frame = Frame::from_rows(
//!     &["dose"],
//!     "response",
//!     [(["low"], 1.0), (["high"], 4.0), (["low"], 2.0)],
//! )
//! .unwrap();
//!
//! let parts = frame.partition(&["dose"]).unwrap();
//! let sums = parts
//!     .reduce(frame.numeric("response").unwrap(), |v| v.iter().sum::<f64>())
//!     .unwrap();
//! assert_eq!(sums[0].1, 4.0); // "high" sorts first
//! assert_eq!(sums[1].1, 3.0);
//! ```

use std::collections::BTreeMap;

use crate::stats::error::{StatsError, StatsResult};

/// A single table column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Factor levels
    Categorical(Vec<String>),
    /// Numeric observations
    Numeric(Vec<f64>),
}

impl Column {
    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Categorical(v) => v.len(),
            Column::Numeric(v) => v.len(),
        }
    }

    /// Whether the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named columns of equal length, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from rows of `(factor levels, target value)`.
    ///
    /// Every row must carry exactly one level per name in `factors`.
    pub fn from_rows<R, L>(factors: &[&str], target: &str, rows: R) -> StatsResult<Self>
    where
        R: IntoIterator<Item = (L, f64)>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let mut levels: Vec<Vec<String>> = vec![Vec::new(); factors.len()];
        let mut values = Vec::new();

        for (i, (key, y)) in rows.into_iter().enumerate() {
            let mut got = 0;
            for level in key {
                if let Some(col) = levels.get_mut(got) {
                    col.push(level.into());
                }
                got += 1;
            }
            if got != factors.len() {
                return Err(StatsError::LengthMismatch {
                    expected: factors.len(),
                    got,
                    context: format!("Frame::from_rows (row {})", i),
                });
            }
            values.push(y);
        }

        let mut frame = Frame::new();
        for (name, col) in factors.iter().zip(levels) {
            frame = frame.with_categorical(name, col)?;
        }
        frame.with_numeric(target, values)
    }

    /// Append a categorical column.
    pub fn with_categorical<I, S>(self, name: &str, values: I) -> StatsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let col = Column::Categorical(values.into_iter().map(Into::into).collect());
        self.with_column(name, col)
    }

    /// Append a numeric column.
    pub fn with_numeric(self, name: &str, values: Vec<f64>) -> StatsResult<Self> {
        self.with_column(name, Column::Numeric(values))
    }

    /// Append a column, checking the name is free and the length matches.
    pub fn with_column(mut self, name: &str, column: Column) -> StatsResult<Self> {
        if self.names.iter().any(|n| n == name) {
            return Err(StatsError::InvalidParameter {
                name: name.to_string(),
                value: f64::NAN,
                reason: "duplicate column name".to_string(),
            });
        }
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(StatsError::LengthMismatch {
                    expected: first.len(),
                    got: column.len(),
                    context: format!("column '{}'", name),
                });
            }
        }
        self.names.push(name.to_string());
        self.columns.push(column);
        Ok(self)
    }

    /// Number of rows (0 for a frame without columns).
    pub fn nrows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> StatsResult<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| StatsError::UnknownColumn {
                name: name.to_string(),
            })
    }

    /// Look up a numeric column.
    pub fn numeric(&self, name: &str) -> StatsResult<&[f64]> {
        match self.column(name)? {
            Column::Numeric(v) => Ok(v),
            Column::Categorical(_) => Err(StatsError::ColumnType {
                name: name.to_string(),
                expected: "numeric".to_string(),
            }),
        }
    }

    /// Look up a categorical column.
    pub fn categorical(&self, name: &str) -> StatsResult<&[String]> {
        match self.column(name)? {
            Column::Categorical(v) => Ok(v),
            Column::Numeric(_) => Err(StatsError::ColumnType {
                name: name.to_string(),
                expected: "categorical".to_string(),
            }),
        }
    }

    /// Partition rows by the level tuple of the given categorical columns.
    ///
    /// Keys are ordered lexicographically; rows within a key keep their
    /// original order.
    pub fn partition(&self, keys: &[&str]) -> StatsResult<Partition> {
        let key_cols = keys
            .iter()
            .map(|k| self.categorical(k))
            .collect::<StatsResult<Vec<_>>>()?;

        let mut groups: BTreeMap<Vec<String>, Vec<usize>> = BTreeMap::new();
        for row in 0..self.nrows() {
            let key = key_cols.iter().map(|col| col[row].clone()).collect();
            groups.entry(key).or_default().push(row);
        }

        Ok(Partition {
            groups,
            nrows: self.nrows(),
        })
    }
}

/// Mapping from key tuple to the indices of the rows that carry it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    groups: BTreeMap<Vec<String>, Vec<usize>>,
    /// Row count of the partitioned frame
    nrows: usize,
}

impl Partition {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no keys (the source frame had no rows).
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Row indices for `key`, if present.
    pub fn rows(&self, key: &[String]) -> Option<&[usize]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Iterate `(key, rows)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&[String], &[usize])> {
        self.groups
            .iter()
            .map(|(k, rows)| (k.as_slice(), rows.as_slice()))
    }

    /// Number of rows in the partitioned frame.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Collect the values of `target` for every key, in key order.
    ///
    /// `target` must be a column of the partitioned frame; any other length is
    /// a [`StatsError::LengthMismatch`].
    pub fn gather(&self, target: &[f64]) -> StatsResult<Vec<Vec<f64>>> {
        self.check_target(target, "Partition::gather")?;
        Ok(self
            .groups
            .values()
            .map(|rows| rows.iter().map(|&r| target[r]).collect())
            .collect())
    }

    /// Apply `f` to the values of `target` for every key, in key order.
    ///
    /// Same length requirement as [`Partition::gather`].
    pub fn reduce<T, F>(&self, target: &[f64], mut f: F) -> StatsResult<Vec<(&[String], T)>>
    where
        F: FnMut(&[f64]) -> T,
    {
        self.check_target(target, "Partition::reduce")?;
        let mut scratch = Vec::new();
        Ok(self
            .groups
            .iter()
            .map(|(k, rows)| {
                scratch.clear();
                scratch.extend(rows.iter().map(|&r| target[r]));
                (k.as_slice(), f(&scratch))
            })
            .collect())
    }

    fn check_target(&self, target: &[f64], context: &str) -> StatsResult<()> {
        if target.len() != self.nrows {
            return Err(StatsError::LengthMismatch {
                expected: self.nrows,
                got: target.len(),
                context: context.to_string(),
            });
        }
        Ok(())
    }
}
