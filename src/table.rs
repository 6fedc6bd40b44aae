//! In-memory table construction.
//!
//! The Rust analogue of "build a table from a dictionary": a [`TableBuilder`]
//! collects named, typed column vectors and assembles them into a Polars
//! [`DataFrame`]. `None` entries become nulls.

use polars::prelude::{DataFrame, NamedFrom, Series};

use crate::error::{ProcessingError, ProcessingResult};

/// Payload of a single column, in one of the supported logical types.
///
/// `From` impls accept plain `Vec<T>` (no nulls), `Vec<Option<T>>`, and
/// `Vec<&str>`, so call sites can pass literals directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    /// 64-bit signed integers.
    Int64(Vec<Option<i64>>),
    /// 64-bit floats.
    Float64(Vec<Option<f64>>),
    /// Booleans.
    Bool(Vec<Option<bool>>),
    /// UTF-8 strings.
    Utf8(Vec<Option<String>>),
}

impl ColumnValues {
    /// Number of entries (including nulls).
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Int64(v) => v.len(),
            ColumnValues::Float64(v) => v.len(),
            ColumnValues::Bool(v) => v.len(),
            ColumnValues::Utf8(v) => v.len(),
        }
    }

    /// True if the column has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn into_series(self, name: String) -> Series {
        match self {
            ColumnValues::Int64(v) => Series::new(name.into(), v),
            ColumnValues::Float64(v) => Series::new(name.into(), v),
            ColumnValues::Bool(v) => Series::new(name.into(), v),
            ColumnValues::Utf8(v) => Series::new(name.into(), v),
        }
    }
}

impl From<Vec<i64>> for ColumnValues {
    fn from(v: Vec<i64>) -> Self {
        ColumnValues::Int64(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<i64>>> for ColumnValues {
    fn from(v: Vec<Option<i64>>) -> Self {
        ColumnValues::Int64(v)
    }
}

impl From<Vec<f64>> for ColumnValues {
    fn from(v: Vec<f64>) -> Self {
        ColumnValues::Float64(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<f64>>> for ColumnValues {
    fn from(v: Vec<Option<f64>>) -> Self {
        ColumnValues::Float64(v)
    }
}

impl From<Vec<bool>> for ColumnValues {
    fn from(v: Vec<bool>) -> Self {
        ColumnValues::Bool(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<bool>>> for ColumnValues {
    fn from(v: Vec<Option<bool>>) -> Self {
        ColumnValues::Bool(v)
    }
}

impl From<Vec<String>> for ColumnValues {
    fn from(v: Vec<String>) -> Self {
        ColumnValues::Utf8(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<String>>> for ColumnValues {
    fn from(v: Vec<Option<String>>) -> Self {
        ColumnValues::Utf8(v)
    }
}

impl From<Vec<&str>> for ColumnValues {
    fn from(v: Vec<&str>) -> Self {
        ColumnValues::Utf8(v.into_iter().map(|s| Some(s.to_owned())).collect())
    }
}

impl From<Vec<Option<&str>>> for ColumnValues {
    fn from(v: Vec<Option<&str>>) -> Self {
        ColumnValues::Utf8(v.into_iter().map(|s| s.map(str::to_owned)).collect())
    }
}

/// Ordered collection of named columns, built up with [`TableBuilder::with_column`]
/// and turned into a [`DataFrame`] by [`TableBuilder::build`].
///
/// # Examples
///
/// ```rust
/// use dataframe_processing::table::TableBuilder;
///
/// # fn main() -> Result<(), dataframe_processing::ProcessingError> {
/// let df = TableBuilder::new()
///     .with_column("id", vec![1i64, 2, 3])
///     .with_column("name", vec!["Ada", "Grace", "Edsger"])
///     .build()?;
/// assert_eq!(df.shape(), (3, 2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    columns: Vec<(String, ColumnValues)>,
}

impl TableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named column. Column order in the built frame is insertion order.
    pub fn with_column(mut self, name: impl Into<String>, values: impl Into<ColumnValues>) -> Self {
        self.columns.push((name.into(), values.into()));
        self
    }

    /// Assemble the columns into a [`DataFrame`].
    ///
    /// All columns must have the same length; a mismatch is reported as
    /// [`ProcessingError::ShapeMismatch`] naming the offending column.
    /// An empty builder yields an empty frame with no columns.
    pub fn build(self) -> ProcessingResult<DataFrame> {
        if let Some((first_name, first)) = self.columns.first() {
            let expected = first.len();
            for (name, values) in &self.columns {
                if values.len() != expected {
                    return Err(ProcessingError::ShapeMismatch {
                        message: format!(
                            "column '{name}' has {} entries but '{first_name}' has {expected}",
                            values.len()
                        ),
                    });
                }
            }
        }

        let columns = self
            .columns
            .into_iter()
            .map(|(name, values)| values.into_series(name).into())
            .collect();
        Ok(DataFrame::new_infer_height(columns)?)
    }
}
