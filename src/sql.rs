//! Declarative queries over registered in-memory tables.

use polars::prelude::{DataFrame, IntoLazy, PolarsResult};
use polars_sql::SQLContext;

/// Execute `query` against the given `(name, table)` pairs.
///
/// Registers each table in a fresh [`SQLContext`] under its name, executes the
/// query, and collects the result. Errors from parsing or execution propagate
/// unmodified.
pub fn execute_sql<'a>(
    tables: impl IntoIterator<Item = (&'a str, &'a DataFrame)>,
    query: &str,
) -> PolarsResult<DataFrame> {
    let mut ctx = SQLContext::new();
    for (name, df) in tables {
        ctx.register(name, df.clone().lazy());
    }
    ctx.execute(query)?.collect()
}
