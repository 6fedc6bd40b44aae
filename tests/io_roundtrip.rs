use std::path::Path;
use std::sync::{Arc, Mutex};

use polars::prelude::DataFrame;

use dataframe_processing::observability::ProcessingObserver;
use dataframe_processing::processor::DataProcessor;
use dataframe_processing::table::TableBuilder;

fn people_df() -> DataFrame {
    TableBuilder::new()
        .with_column("first_name", vec!["Alice", "Bob"])
        .with_column("age", vec![25i64, 30])
        .with_column("monthly_salary", vec![Some(50_000i64), None])
        .build()
        .unwrap()
}

#[derive(Default)]
struct RecordingObserver {
    written: Mutex<Vec<(String, usize)>>,
}

impl ProcessingObserver for RecordingObserver {
    fn on_table_written(&self, path: &Path, rows: usize) {
        self.written
            .lock()
            .unwrap()
            .push((path.display().to_string(), rows));
    }
}

#[test]
fn read_csv_fixture_happy_path() {
    let processor = DataProcessor::new();
    let df = processor.read_csv("tests/fixtures/people.csv").unwrap();

    assert_eq!(df.shape(), (2, 5));
    let names = df.column("first_name").unwrap().str().unwrap();
    assert_eq!(names.get(0), Some("Alice"));
    // Bob's empty salary cell comes back as null.
    assert_eq!(df.column("monthly_salary").unwrap().null_count(), 1);
}

#[test]
fn csv_roundtrip_preserves_shape_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");
    let processor = DataProcessor::new();
    let df = people_df();

    processor.write_csv(&df, &path).unwrap();
    let back = processor.read_csv(&path).unwrap();

    assert!(back.equals_missing(&df));
}

#[test]
fn parquet_roundtrip_preserves_shape_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.parquet");
    let processor = DataProcessor::new();
    let df = people_df();

    processor.write_parquet(&df, &path).unwrap();
    let back = processor.read_parquet(&path).unwrap();

    assert!(back.equals_missing(&df));
}

#[test]
fn writes_are_reported_to_the_observer() {
    let dir = tempfile::tempdir().unwrap();
    let observer = Arc::new(RecordingObserver::default());
    let processor = DataProcessor::new().with_observer(observer.clone());
    let df = people_df();

    processor.write_csv(&df, dir.path().join("a.csv")).unwrap();
    processor
        .write_parquet(&df, dir.path().join("b.parquet"))
        .unwrap();

    let written = observer.written.lock().unwrap();
    assert_eq!(written.len(), 2);
    assert!(written[0].0.ends_with("a.csv"));
    assert_eq!(written[0].1, 2);
    assert!(written[1].0.ends_with("b.parquet"));
}

#[test]
fn read_csv_missing_file_is_an_io_error() {
    let processor = DataProcessor::new();
    let err = processor.read_csv("does_not_exist.csv").unwrap_err();
    assert!(err.to_string().contains("io error"));
}
