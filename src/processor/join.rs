//! Join strategies and the join forwarding call.

use polars::prelude::{
    DataFrame, IntoLazy, JoinBuilder, JoinCoalesce, JoinType, PolarsResult, col,
};

/// How two tables are combined on a key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStrategy {
    /// Rows whose key appears in both tables.
    Inner,
    /// All left rows, matched right columns (nulls when unmatched).
    Left,
    /// All right rows, matched left columns.
    Right,
    /// All rows from both sides (SQL full outer).
    Full,
    /// Left rows that have a match in right; only left columns.
    Semi,
    /// Left rows that have no match in right; only left columns.
    Anti,
}

impl JoinStrategy {
    /// Parse a join strategy from its lower-case name (case-insensitive).
    ///
    /// `"outer"` is accepted as an alias for [`JoinStrategy::Full`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "inner" => Some(Self::Inner),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "full" | "outer" => Some(Self::Full),
            "semi" => Some(Self::Semi),
            "anti" => Some(Self::Anti),
            _ => None,
        }
    }

    fn to_polars(self) -> JoinType {
        match self {
            JoinStrategy::Inner => JoinType::Inner,
            JoinStrategy::Left => JoinType::Left,
            JoinStrategy::Right => JoinType::Right,
            JoinStrategy::Full => JoinType::Full,
            JoinStrategy::Semi => JoinType::Semi,
            JoinStrategy::Anti => JoinType::Anti,
        }
    }
}

/// Join two frames on a single key column, coalescing the key.
pub(crate) fn join_frames(
    left: &DataFrame,
    right: &DataFrame,
    on: &str,
    strategy: JoinStrategy,
) -> PolarsResult<DataFrame> {
    JoinBuilder::new(left.clone().lazy())
        .with(right.clone().lazy())
        .how(strategy.to_polars())
        .on(&[col(on)])
        .coalesce(JoinCoalesce::CoalesceColumns)
        .finish()
        .collect()
}
