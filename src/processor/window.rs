//! Per-partition window columns.

use polars::prelude::{
    DataFrame, IntoLazy, PolarsResult, RankMethod, RankOptions, RollingOptionsFixedWindow,
    SortMultipleOptions, col,
};

/// Add a 2-row rolling mean and an average-method rank of `target_col`,
/// both computed within `partition_col` partitions.
///
/// The rolling mean needs a full window, so the first row of each partition
/// is null. Output is sorted by (`partition_col`, `order_col`).
pub(crate) fn with_window_columns(
    df: &DataFrame,
    partition_col: &str,
    order_col: &str,
    target_col: &str,
) -> PolarsResult<DataFrame> {
    let rolling = RollingOptionsFixedWindow {
        window_size: 2,
        min_periods: 2,
        ..Default::default()
    };
    let rank = RankOptions {
        method: RankMethod::Average,
        descending: false,
    };

    df.clone()
        .lazy()
        .with_columns([
            col(target_col)
                .rolling_mean(rolling)
                .over([col(partition_col)])
                .alias(format!("rolling_mean_{target_col}")),
            col(target_col)
                .rank(rank, None)
                .over([col(partition_col)])
                .alias(format!("rank_{target_col}")),
        ])
        .sort_by_exprs(
            [col(partition_col), col(order_col)],
            SortMultipleOptions::default(),
        )
        .collect()
}
