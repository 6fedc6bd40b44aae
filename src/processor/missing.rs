//! Missing-value strategies.

use polars::prelude::{
    AnyValue, DataFrame, Expr, FillNullStrategy, IntoLazy, PolarsResult, SortMultipleOptions,
    by_name, col, len, lit,
};

/// How nulls in a target column are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingValueStrategy {
    /// Fill with the column's mean.
    Mean,
    /// Fill with the column's median.
    Median,
    /// Fill with the column's most frequent non-null value.
    Mode,
    /// Propagate the previous non-null value forward.
    ForwardFill,
    /// Propagate the next non-null value backward.
    BackwardFill,
    /// Drop rows where the column is null.
    Drop,
}

impl MissingValueStrategy {
    /// Parse a strategy from its lower-case name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mean" => Some(Self::Mean),
            "median" => Some(Self::Median),
            "mode" => Some(Self::Mode),
            "forward_fill" => Some(Self::ForwardFill),
            "backward_fill" => Some(Self::BackwardFill),
            "drop" => Some(Self::Drop),
            _ => None,
        }
    }
}

/// Apply `strategy` to the nulls of `column`.
///
/// The caller has already checked that `column` exists. Aggregate-based fills
/// on an all-null column fill with null, which leaves the input unchanged.
pub(crate) fn apply_strategy(
    df: &DataFrame,
    strategy: MissingValueStrategy,
    column: &str,
) -> PolarsResult<DataFrame> {
    let lf = df.clone().lazy();
    match strategy {
        MissingValueStrategy::Mean => lf
            .with_columns([col(column).fill_null(col(column).mean())])
            .collect(),
        MissingValueStrategy::Median => lf
            .with_columns([col(column).fill_null(col(column).median())])
            .collect(),
        MissingValueStrategy::Mode => match mode_literal(df, column)? {
            Some(value) => lf.with_columns([col(column).fill_null(value)]).collect(),
            None => Ok(df.clone()),
        },
        MissingValueStrategy::ForwardFill => lf
            .with_columns([col(column).fill_null_with_strategy(FillNullStrategy::Forward(None))])
            .collect(),
        MissingValueStrategy::BackwardFill => lf
            .with_columns([col(column).fill_null_with_strategy(FillNullStrategy::Backward(None))])
            .collect(),
        MissingValueStrategy::Drop => lf.drop_nulls(Some(by_name([column], true, false))).collect(),
    }
}

/// Most frequent non-null value of a column as a literal expression.
///
/// Polars has no direct mode aggregate here, so this counts values with a
/// group-by and takes the head of the descending sort. Returns `None` when
/// the column holds no non-null values or an unrepresentable dtype.
fn mode_literal(df: &DataFrame, column: &str) -> PolarsResult<Option<Expr>> {
    let counts = df
        .clone()
        .lazy()
        .drop_nulls(Some(by_name([column], true, false)))
        .group_by([col(column)])
        .agg([len().alias("len")])
        .sort_by_exprs(
            [col("len")],
            SortMultipleOptions::new().with_order_descending(true),
        )
        .limit(1)
        .collect()?;

    if counts.height() == 0 {
        return Ok(None);
    }
    Ok(any_value_to_lit(&counts.column(column)?.get(0)?))
}

fn any_value_to_lit(value: &AnyValue<'_>) -> Option<Expr> {
    match value {
        AnyValue::Int64(v) => Some(lit(*v)),
        AnyValue::Int32(v) => Some(lit(*v)),
        AnyValue::Float64(v) => Some(lit(*v)),
        AnyValue::Float32(v) => Some(lit(*v)),
        AnyValue::Boolean(b) => Some(lit(*b)),
        AnyValue::String(s) => Some(lit(s.to_string())),
        AnyValue::StringOwned(s) => Some(lit(s.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::MissingValueStrategy;

    #[test]
    fn from_name_parses_documented_names() {
        assert_eq!(
            MissingValueStrategy::from_name("mean"),
            Some(MissingValueStrategy::Mean)
        );
        assert_eq!(
            MissingValueStrategy::from_name("MEDIAN"),
            Some(MissingValueStrategy::Median)
        );
        assert_eq!(
            MissingValueStrategy::from_name("forward_fill"),
            Some(MissingValueStrategy::ForwardFill)
        );
        assert_eq!(
            MissingValueStrategy::from_name("backward_fill"),
            Some(MissingValueStrategy::BackwardFill)
        );
        assert_eq!(
            MissingValueStrategy::from_name("drop"),
            Some(MissingValueStrategy::Drop)
        );
        assert_eq!(MissingValueStrategy::from_name("interpolate"), None);
    }
}
