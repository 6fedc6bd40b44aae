use polars::prelude::DataFrame;

use dataframe_processing::processor::DataProcessor;
use dataframe_processing::table::TableBuilder;

/// Departments interleaved on purpose: window expressions must group by
/// partition regardless of row order, and the result is sorted afterwards.
fn headcount_df() -> DataFrame {
    TableBuilder::new()
        .with_column("department", vec!["eng", "ops", "eng", "ops", "eng"])
        .with_column("month", vec![1i64, 1, 2, 2, 3])
        .with_column("headcount", vec![10.0f64, 4.0, 14.0, 6.0, 18.0])
        .build()
        .unwrap()
}

#[test]
fn rolling_mean_is_computed_within_partitions() {
    let processor = DataProcessor::new();
    let out = processor
        .apply_window_function(&headcount_df(), "department", "month", "headcount")
        .unwrap();

    // Sorted output: eng months 1..3, then ops months 1..2.
    let departments: Vec<&str> = out
        .column("department")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect();
    assert_eq!(departments, vec!["eng", "eng", "eng", "ops", "ops"]);

    let rolling: Vec<Option<f64>> = out
        .column("rolling_mean_headcount")
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect();
    // The 2-row window needs a full window, so each partition starts null.
    assert_eq!(
        rolling,
        vec![None, Some(12.0), Some(16.0), None, Some(5.0)]
    );
}

#[test]
fn rank_is_computed_within_partitions() {
    let processor = DataProcessor::new();
    let out = processor
        .apply_window_function(&headcount_df(), "department", "month", "headcount")
        .unwrap();

    let ranks: Vec<f64> = out
        .column("rank_headcount")
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect();
    assert_eq!(ranks, vec![1.0, 2.0, 3.0, 1.0, 2.0]);
}

#[test]
fn ties_share_an_average_rank() {
    let processor = DataProcessor::new();
    let df = TableBuilder::new()
        .with_column("department", vec!["eng", "eng", "eng"])
        .with_column("month", vec![1i64, 2, 3])
        .with_column("headcount", vec![10.0f64, 10.0, 20.0])
        .build()
        .unwrap();

    let out = processor
        .apply_window_function(&df, "department", "month", "headcount")
        .unwrap();

    let ranks: Vec<f64> = out
        .column("rank_headcount")
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect();
    assert_eq!(ranks, vec![1.5, 1.5, 3.0]);
}
