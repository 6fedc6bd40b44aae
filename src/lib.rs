//! `dataframe-processing` is a small library of Polars-backed table operations:
//! building tables from in-memory columns, filtering rows by expression,
//! grouped summary statistics, derived columns, window functions,
//! missing-value handling, joins, SQL over registered tables, and CSV/Parquet
//! reads and writes.
//!
//! Every operation is a direct pass-through to Polars; the crate's own code is
//! parameter plumbing, strategy dispatch, deterministic sample-data synthesis,
//! and observer hooks. All work is synchronous and materialized; any
//! parallelism happens inside the engine.
//!
//! ## Modules
//!
//! - [`table`]: in-memory table construction from named column vectors
//! - [`processor`]: one forwarding method per operation ([`processor::DataProcessor`])
//! - [`sales`]: the deterministic sample sales pipeline
//! - [`observability`]: warning/write hooks for soft failures
//! - [`sql`]: query execution over registered tables (Cargo feature `sql`, default on)
//! - [`error`]: the crate-wide error enum
//!
//! ## Quick example: build, filter, aggregate
//!
//! ```rust
//! use dataframe_processing::processor::DataProcessor;
//! use dataframe_processing::table::TableBuilder;
//! use polars::prelude::{col, lit};
//!
//! # fn main() -> Result<(), dataframe_processing::ProcessingError> {
//! let processor = DataProcessor::new();
//! let df = processor.from_columns(
//!     TableBuilder::new()
//!         .with_column("city", vec!["Lisbon", "Lisbon", "Porto"])
//!         .with_column("sales", vec![10.0f64, 20.0, 5.0]),
//! )?;
//!
//! let big = processor.filter(&df, col("sales").gt(lit(8.0)))?;
//! assert_eq!(big.height(), 2);
//!
//! let stats = processor.summary_statistics(&df, "city", "sales")?;
//! assert_eq!(stats.height(), 2); // one row per city
//! # Ok(())
//! # }
//! ```
//!
//! ## Quick example: SQL over registered tables
//!
//! ```rust
//! # #[cfg(feature = "sql")]
//! # fn main() -> Result<(), dataframe_processing::ProcessingError> {
//! use dataframe_processing::processor::DataProcessor;
//! use dataframe_processing::table::TableBuilder;
//!
//! let processor = DataProcessor::new();
//! let people = processor.from_columns(
//!     TableBuilder::new()
//!         .with_column("name", vec!["Ada", "Grace"])
//!         .with_column("age", vec![36i64, 45]),
//! )?;
//!
//! let out = processor.sql(
//!     [("people", &people)],
//!     "SELECT name FROM people WHERE age > 40",
//! )?;
//! assert_eq!(out.height(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "sql"))]
//! # fn main() {}
//! ```
//!
//! ## Missing values
//!
//! [`processor::DataProcessor::handle_missing`] resolves nulls in one target
//! column with a [`processor::MissingValueStrategy`] (mean, median, mode,
//! directional fill, or drop). The string-switch variant
//! `handle_missing_by_name` mirrors the original script surface: unknown
//! strategy names and absent columns warn through the attached
//! [`observability::ProcessingObserver`] and return the input unchanged.

pub mod error;
pub mod observability;
pub mod processor;
pub mod sales;
#[cfg(feature = "sql")]
pub mod sql;
pub mod table;

pub use error::{ProcessingError, ProcessingResult};
