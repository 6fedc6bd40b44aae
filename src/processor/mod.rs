//! Forwarding operations over Polars DataFrames.
//!
//! [`DataProcessor`] exposes one call per documented operation; each is a thin
//! forward to the engine. Soft failures (unknown strategy names, absent target
//! columns) are reported to the attached [`ProcessingObserver`] and return the
//! input unchanged; everything else propagates the engine error.

mod join;
mod missing;
mod window;

pub use join::JoinStrategy;
pub use missing::MissingValueStrategy;

use std::fmt;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use polars::prelude::{
    CsvReadOptions, CsvWriter, DataFrame, Expr, IntoLazy, ParquetReader, ParquetWriter, SerReader,
    SerWriter, SortMultipleOptions, col, concat_str, len, lit, when,
};

use crate::error::ProcessingResult;
use crate::observability::{ProcessingObserver, ProcessingWarning};
use crate::table::TableBuilder;

/// Stateless handle over the documented processing operations.
///
/// # Examples
///
/// ```rust
/// use dataframe_processing::processor::DataProcessor;
/// use dataframe_processing::table::TableBuilder;
/// use polars::prelude::{col, lit};
///
/// # fn main() -> Result<(), dataframe_processing::ProcessingError> {
/// let processor = DataProcessor::new();
/// let df = processor.from_columns(
///     TableBuilder::new()
///         .with_column("name", vec!["Ada", "Grace", "Edsger"])
///         .with_column("age", vec![36i64, 45, 28]),
/// )?;
///
/// let adults = processor.filter(&df, col("age").gt(lit(30)))?;
/// assert_eq!(adults.height(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct DataProcessor {
    observer: Option<Arc<dyn ProcessingObserver>>,
}

impl fmt::Debug for DataProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataProcessor")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl DataProcessor {
    /// Create a processor with no observer attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer for warnings and write notifications.
    pub fn with_observer(mut self, observer: Arc<dyn ProcessingObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    fn warn(&self, warning: ProcessingWarning) {
        if let Some(obs) = &self.observer {
            obs.on_warning(&warning);
        }
    }

    fn notify_written(&self, path: &Path, rows: usize) {
        if let Some(obs) = &self.observer {
            obs.on_table_written(path, rows);
        }
    }

    /// Build a table from in-memory columns ([`TableBuilder`] pass-through).
    pub fn from_columns(&self, builder: TableBuilder) -> ProcessingResult<DataFrame> {
        builder.build()
    }

    /// Read a header CSV file, inferring the schema from the first 100 rows.
    pub fn read_csv(&self, path: impl AsRef<Path>) -> ProcessingResult<DataFrame> {
        let file = File::open(path)?;
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .into_reader_with_file_handle(file)
            .finish()?;
        Ok(df)
    }

    /// Write a table to a header CSV file with default settings.
    pub fn write_csv(&self, df: &DataFrame, path: impl AsRef<Path>) -> ProcessingResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df.clone())?;
        self.notify_written(path, df.height());
        Ok(())
    }

    /// Read a Parquet file with default settings.
    pub fn read_parquet(&self, path: impl AsRef<Path>) -> ProcessingResult<DataFrame> {
        let file = File::open(path)?;
        Ok(ParquetReader::new(file).finish()?)
    }

    /// Write a table to a Parquet file with default settings.
    pub fn write_parquet(&self, df: &DataFrame, path: impl AsRef<Path>) -> ProcessingResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        ParquetWriter::new(file).finish(&mut df.clone())?;
        self.notify_written(path, df.height());
        Ok(())
    }

    /// Keep only the rows satisfying a caller-supplied boolean expression.
    pub fn filter(&self, df: &DataFrame, predicate: Expr) -> ProcessingResult<DataFrame> {
        Ok(df.clone().lazy().filter(predicate).collect()?)
    }

    /// Grouped summary statistics of `agg_col` per `group_col` value.
    ///
    /// Emits `mean_<agg>`, `median_<agg>`, `min_<agg>`, `max_<agg>`,
    /// `std_<agg>` (sample standard deviation) and `count` (rows per group,
    /// nulls included), sorted by the group column.
    pub fn summary_statistics(
        &self,
        df: &DataFrame,
        group_col: &str,
        agg_col: &str,
    ) -> ProcessingResult<DataFrame> {
        let out = df
            .clone()
            .lazy()
            .group_by([col(group_col)])
            .agg([
                col(agg_col).mean().alias(format!("mean_{agg_col}")),
                col(agg_col).median().alias(format!("median_{agg_col}")),
                col(agg_col).min().alias(format!("min_{agg_col}")),
                col(agg_col).max().alias(format!("max_{agg_col}")),
                col(agg_col).std(1).alias(format!("std_{agg_col}")),
                len().alias("count"),
            ])
            .sort_by_exprs([col(group_col)], SortMultipleOptions::default())
            .collect()?;
        Ok(out)
    }

    /// Add the demo's derived columns to a people table.
    ///
    /// Expects `first_name`, `last_name`, `age` and `monthly_salary`; adds
    /// `full_name` (space-joined, null propagates), `age_group`
    /// (Young < 30 <= Adult < 50 <= Senior) and `annual_salary`
    /// (12x monthly, nulls filled as 0).
    pub fn add_derived_columns(&self, df: &DataFrame) -> ProcessingResult<DataFrame> {
        let out = df
            .clone()
            .lazy()
            .with_columns([
                concat_str([col("first_name"), col("last_name")], " ", false).alias("full_name"),
                when(col("age").lt(lit(30)))
                    .then(lit("Young"))
                    .when(col("age").lt(lit(50)))
                    .then(lit("Adult"))
                    .otherwise(lit("Senior"))
                    .alias("age_group"),
                (col("monthly_salary") * lit(12))
                    .fill_null(lit(0))
                    .alias("annual_salary"),
            ])
            .collect()?;
        Ok(out)
    }

    /// Add per-partition window columns: a 2-row rolling mean and an
    /// average-method rank of `target_col`, sorted by (partition, order).
    pub fn apply_window_function(
        &self,
        df: &DataFrame,
        partition_col: &str,
        order_col: &str,
        target_col: &str,
    ) -> ProcessingResult<DataFrame> {
        Ok(window::with_window_columns(
            df,
            partition_col,
            order_col,
            target_col,
        )?)
    }

    /// Resolve nulls in `column` with the given strategy.
    ///
    /// An absent column warns via the observer and returns the input
    /// unchanged, as does an aggregate fill over an all-null column.
    pub fn handle_missing(
        &self,
        df: &DataFrame,
        strategy: MissingValueStrategy,
        column: &str,
    ) -> ProcessingResult<DataFrame> {
        if df.column(column).is_err() {
            self.warn(ProcessingWarning::MissingColumn {
                column: column.to_owned(),
            });
            return Ok(df.clone());
        }
        Ok(missing::apply_strategy(df, strategy, column)?)
    }

    /// String-switch form of [`Self::handle_missing`].
    ///
    /// Unknown strategy names warn via the observer and return the input
    /// unchanged.
    pub fn handle_missing_by_name(
        &self,
        df: &DataFrame,
        strategy_name: &str,
        column: &str,
    ) -> ProcessingResult<DataFrame> {
        match MissingValueStrategy::from_name(strategy_name) {
            Some(strategy) => self.handle_missing(df, strategy, column),
            None => {
                self.warn(ProcessingWarning::UnknownStrategy {
                    name: strategy_name.to_owned(),
                });
                Ok(df.clone())
            }
        }
    }

    /// Join two tables on a single key column; the key is coalesced.
    pub fn join(
        &self,
        left: &DataFrame,
        right: &DataFrame,
        on: &str,
        strategy: JoinStrategy,
    ) -> ProcessingResult<DataFrame> {
        Ok(join::join_frames(left, right, on, strategy)?)
    }

    /// String-switch form of [`Self::join`].
    ///
    /// Unknown strategy names warn via the observer and fall back to inner.
    pub fn join_by_name(
        &self,
        left: &DataFrame,
        right: &DataFrame,
        on: &str,
        strategy_name: &str,
    ) -> ProcessingResult<DataFrame> {
        let strategy = match JoinStrategy::from_name(strategy_name) {
            Some(strategy) => strategy,
            None => {
                self.warn(ProcessingWarning::UnknownJoinStrategy {
                    name: strategy_name.to_owned(),
                });
                JoinStrategy::Inner
            }
        };
        self.join(left, right, on, strategy)
    }

    /// Execute a SQL query against the given named tables.
    ///
    /// Each `(name, table)` pair is registered in a fresh SQL context; the
    /// query result is collected eagerly. Malformed queries and unknown table
    /// references propagate as engine errors.
    #[cfg(feature = "sql")]
    pub fn sql<'a>(
        &self,
        tables: impl IntoIterator<Item = (&'a str, &'a DataFrame)>,
        query: &str,
    ) -> ProcessingResult<DataFrame> {
        Ok(crate::sql::execute_sql(tables, query)?)
    }
}
