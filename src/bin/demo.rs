//! Console walkthrough of every operation, ending with the sales pipeline.
//!
//! Run with: cargo run --bin demo

use std::sync::Arc;

use polars::prelude::{DataFrame, col, lit};

use dataframe_processing::ProcessingResult;
use dataframe_processing::observability::StdErrObserver;
use dataframe_processing::processor::{DataProcessor, JoinStrategy};
use dataframe_processing::sales::{SalesPipeline, SalesPipelineOptions};
use dataframe_processing::table::TableBuilder;

fn print_header(title: &str) {
    println!("\n{}", "=".repeat(70));
    println!("  {title}");
    println!("{}", "=".repeat(70));
}

fn people_table(processor: &DataProcessor) -> ProcessingResult<DataFrame> {
    processor.from_columns(
        TableBuilder::new()
            .with_column(
                "first_name",
                vec!["Alice", "Bob", "Charlie", "Diana", "Eve"],
            )
            .with_column("last_name", vec!["Smith", "Jones", "Brown", "Wilson", "Davis"])
            .with_column("age", vec![25i64, 30, 35, 28, 40])
            .with_column(
                "city",
                vec!["New York", "London", "New York", "Paris", "London"],
            )
            .with_column(
                "monthly_salary",
                vec![Some(50_000i64), Some(70_000), Some(60_000), None, Some(80_000)],
            ),
    )
}

fn demo_basic_operations(processor: &DataProcessor) -> ProcessingResult<()> {
    print_header("1. BASIC OPERATIONS");

    let df = people_table(processor)?;
    println!("\nLoaded table: shape={:?}", df.shape());

    let enhanced = processor.add_derived_columns(&df)?;
    println!("\nDerived columns (full_name, age_group, annual_salary):\n{enhanced}");

    let adults = processor.filter(&enhanced, col("age").gt(lit(28)))?;
    println!("Rows with age > 28:\n{adults}");

    let stats = processor.summary_statistics(&df, "city", "monthly_salary")?;
    println!("Salary statistics per city:\n{stats}");
    Ok(())
}

fn demo_window_functions(processor: &DataProcessor) -> ProcessingResult<()> {
    print_header("2. WINDOW FUNCTIONS");

    let df = processor.from_columns(
        TableBuilder::new()
            .with_column("department", vec!["eng", "eng", "eng", "ops", "ops"])
            .with_column("month", vec![1i64, 2, 3, 1, 2])
            .with_column("headcount", vec![10.0f64, 14.0, 18.0, 4.0, 6.0]),
    )?;

    let windowed = processor.apply_window_function(&df, "department", "month", "headcount")?;
    println!("\nRolling mean and rank per department:\n{windowed}");
    Ok(())
}

fn demo_missing_data(processor: &DataProcessor) -> ProcessingResult<()> {
    print_header("3. MISSING DATA STRATEGIES");

    let df = processor.from_columns(
        TableBuilder::new()
            .with_column("id", vec![1i64, 2, 3, 4])
            .with_column("value", vec![Some(10.0f64), None, Some(30.0), None]),
    )?;
    println!("\nInput with nulls:\n{df}");

    for strategy in ["mean", "forward_fill", "drop"] {
        let out = processor.handle_missing_by_name(&df, strategy, "value")?;
        println!("Strategy '{strategy}':\n{out}");
    }

    // Unknown names warn through the observer and return the input unchanged.
    let unchanged = processor.handle_missing_by_name(&df, "interpolate", "value")?;
    println!("Unknown strategy left {} rows untouched", unchanged.height());
    Ok(())
}

fn demo_joins(processor: &DataProcessor) -> ProcessingResult<()> {
    print_header("4. JOINS");

    let people = people_table(processor)?;
    let cities = processor.from_columns(
        TableBuilder::new()
            .with_column("city", vec!["New York", "London", "Berlin"])
            .with_column("country", vec!["USA", "UK", "Germany"]),
    )?;

    let inner = processor.join(&people, &cities, "city", JoinStrategy::Inner)?;
    println!("\nInner join on city ({} rows):\n{inner}", inner.height());

    let left = processor.join(&people, &cities, "city", JoinStrategy::Left)?;
    println!("Left join on city ({} rows):\n{left}", left.height());
    Ok(())
}

#[cfg(feature = "sql")]
fn demo_sql(processor: &DataProcessor) -> ProcessingResult<()> {
    print_header("5. SQL QUERIES");

    let people = people_table(processor)?;
    let out = processor.sql(
        [("people", &people)],
        "SELECT city, AVG(monthly_salary) AS avg_salary \
         FROM people GROUP BY city ORDER BY avg_salary DESC",
    )?;
    println!("\nAverage salary per city via SQL:\n{out}");
    Ok(())
}

fn demo_sales_pipeline() -> ProcessingResult<()> {
    print_header("6. SALES PIPELINE");

    let pipeline = SalesPipeline::new(SalesPipelineOptions::default())
        .with_observer(Arc::new(StdErrObserver));

    let _ = pipeline.write_sample_data()?;
    let (sales, customers) = pipeline.load_sample_data()?;
    let report = pipeline.process(&sales, &customers)?;

    println!("\nSales summary per category and region:\n{}", report.summary);
    println!("Top 5 customers by total spend:\n{}", report.top_customers);
    println!("Daily revenue (lazy until collected):\n{}", report.daily_revenue);
    Ok(())
}

fn main() -> ProcessingResult<()> {
    let processor = DataProcessor::new().with_observer(Arc::new(StdErrObserver));

    demo_basic_operations(&processor)?;
    demo_window_functions(&processor)?;
    demo_missing_data(&processor)?;
    demo_joins(&processor)?;
    #[cfg(feature = "sql")]
    demo_sql(&processor)?;
    demo_sales_pipeline()?;

    println!("\nDemo complete.");
    Ok(())
}
