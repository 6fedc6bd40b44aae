//! Deterministic sample sales pipeline.
//!
//! Synthesizes order and customer tables from index-derived formulas, persists
//! them (orders as CSV, customers as Parquet), and runs a fixed sequence of
//! joins and aggregations over them. The formulas exist to produce plausible
//! demo values; the point of the module is the pipeline shape.

use std::path::PathBuf;
use std::sync::Arc;

use polars::prelude::{
    DataFrame, IntoLazy, JoinBuilder, JoinCoalesce, JoinType, SortMultipleOptions,
    StrptimeOptions, col, len,
};

use crate::error::ProcessingResult;
use crate::observability::ProcessingObserver;
use crate::processor::DataProcessor;
use crate::table::TableBuilder;

/// Number of distinct order dates, matching the span 2024-01-01..=2024-10-07.
const DATE_SPAN_DAYS: usize = 281;

const DAYS_IN_MONTH_2024: [usize; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Configuration for [`SalesPipeline`].
#[derive(Debug, Clone)]
pub struct SalesPipelineOptions {
    /// Directory sample files are written to (created if needed).
    pub data_dir: PathBuf,
    /// Number of synthesized order rows.
    pub orders: usize,
    /// Number of synthesized customer rows.
    pub customers: usize,
}

impl Default for SalesPipelineOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            orders: 1_000,
            customers: 100,
        }
    }
}

/// Materialized outputs of [`SalesPipeline::process`].
#[derive(Debug, Clone)]
pub struct SalesReport {
    /// Revenue, order count and mean quantity per (category, region),
    /// sorted by revenue descending.
    pub summary: DataFrame,
    /// The five highest-spending customers.
    pub top_customers: DataFrame,
    /// Revenue per order day, sorted by day.
    pub daily_revenue: DataFrame,
}

/// Generates, persists and analyzes the sample sales data.
#[derive(Debug, Default)]
pub struct SalesPipeline {
    opts: SalesPipelineOptions,
    processor: DataProcessor,
}

impl SalesPipeline {
    /// Create a pipeline with the given options.
    pub fn new(opts: SalesPipelineOptions) -> Self {
        Self {
            opts,
            processor: DataProcessor::new(),
        }
    }

    /// Attach an observer; file writes are reported through it.
    pub fn with_observer(mut self, observer: Arc<dyn ProcessingObserver>) -> Self {
        self.processor = DataProcessor::new().with_observer(observer);
        self
    }

    /// Path of the orders CSV inside the data directory.
    pub fn sales_path(&self) -> PathBuf {
        self.opts.data_dir.join("sales_data.csv")
    }

    /// Path of the customers Parquet file inside the data directory.
    pub fn customers_path(&self) -> PathBuf {
        self.opts.data_dir.join("customer_data.parquet")
    }

    /// Synthesize the orders table.
    ///
    /// Every column is a pure function of the row index, so repeated calls
    /// produce identical frames.
    pub fn generate_sales(&self) -> ProcessingResult<DataFrame> {
        let n = self.opts.orders;
        let customers = self.opts.customers.max(1);

        let order_id: Vec<i64> = (1..=n as i64).collect();
        let product: Vec<String> = (0..n).map(|i| format!("Product_{}", i % 10)).collect();
        let category: Vec<String> = (0..n).map(|i| format!("Category_{}", i % 3)).collect();
        let price: Vec<f64> = (0..n)
            .map(|i| 10.0 + (i % 50) as f64 + (i % 10) as f64 * 0.5)
            .collect();
        let quantity: Vec<i64> = (0..n).map(|i| (1 + i % 5) as i64).collect();
        let customer_id: Vec<String> = (0..n)
            .map(|i| format!("CUST_{}", i % customers))
            .collect();
        let order_date: Vec<String> = (0..n).map(|i| order_date_2024(i % DATE_SPAN_DAYS)).collect();

        TableBuilder::new()
            .with_column("order_id", order_id)
            .with_column("product", product)
            .with_column("category", category)
            .with_column("price", price)
            .with_column("quantity", quantity)
            .with_column("customer_id", customer_id)
            .with_column("order_date", order_date)
            .build()
    }

    /// Synthesize the customers table.
    pub fn generate_customers(&self) -> ProcessingResult<DataFrame> {
        let n = self.opts.customers;

        let customer_id: Vec<String> = (0..n).map(|i| format!("CUST_{i}")).collect();
        let region: Vec<String> = (0..n).map(|i| format!("Region_{}", i % 4)).collect();
        let loyalty_status: Vec<String> = (0..n)
            .map(|i| {
                if i % 10 == 0 {
                    "Gold"
                } else if i % 5 == 0 {
                    "Silver"
                } else {
                    "Bronze"
                }
                .to_owned()
            })
            .collect();

        TableBuilder::new()
            .with_column("customer_id", customer_id)
            .with_column("region", region)
            .with_column("loyalty_status", loyalty_status)
            .build()
    }

    /// Generate both tables and persist them under the data directory.
    ///
    /// Orders go to CSV, customers to Parquet. Returns the generated frames.
    pub fn write_sample_data(&self) -> ProcessingResult<(DataFrame, DataFrame)> {
        std::fs::create_dir_all(&self.opts.data_dir)?;

        let sales = self.generate_sales()?;
        let customers = self.generate_customers()?;
        self.processor.write_csv(&sales, self.sales_path())?;
        self.processor.write_parquet(&customers, self.customers_path())?;
        Ok((sales, customers))
    }

    /// Read both tables back from the data directory.
    pub fn load_sample_data(&self) -> ProcessingResult<(DataFrame, DataFrame)> {
        let sales = self.processor.read_csv(self.sales_path())?;
        let customers = self.processor.read_parquet(self.customers_path())?;
        Ok((sales, customers))
    }

    /// Run the fixed analysis sequence over the two tables.
    ///
    /// Adds `total_sale_value`, left-joins customers onto orders, then
    /// materializes the three aggregate views of [`SalesReport`]. The daily
    /// view stays lazy until its final `collect`.
    pub fn process(
        &self,
        sales: &DataFrame,
        customers: &DataFrame,
    ) -> ProcessingResult<SalesReport> {
        let enriched = sales
            .clone()
            .lazy()
            .with_columns([(col("price") * col("quantity")).alias("total_sale_value")]);

        let joined = JoinBuilder::new(enriched)
            .with(customers.clone().lazy())
            .how(JoinType::Left)
            .on(&[col("customer_id")])
            .coalesce(JoinCoalesce::CoalesceColumns)
            .finish();

        let summary = joined
            .clone()
            .group_by([col("category"), col("region")])
            .agg([
                col("total_sale_value").sum().alias("total_revenue"),
                len().alias("number_of_orders"),
                col("quantity").mean().alias("avg_quantity_per_order"),
            ])
            .sort_by_exprs(
                [col("total_revenue")],
                SortMultipleOptions::new().with_order_descending(true),
            )
            .collect()?;

        let top_customers = joined
            .clone()
            .group_by([col("customer_id")])
            .agg([col("total_sale_value").sum().alias("total_spent")])
            .sort_by_exprs(
                [col("total_spent")],
                SortMultipleOptions::new().with_order_descending(true),
            )
            .limit(5)
            .collect()?;

        let daily_revenue = joined
            .with_columns([col("order_date")
                .str()
                .to_date(StrptimeOptions {
                    format: Some("%Y-%m-%d".into()),
                    ..Default::default()
                })
                .alias("day")])
            .group_by([col("day")])
            .agg([col("total_sale_value").sum().alias("daily_revenue")])
            .sort_by_exprs([col("day")], SortMultipleOptions::default())
            .collect()?;

        Ok(SalesReport {
            summary,
            top_customers,
            daily_revenue,
        })
    }
}

/// ISO date `day_offset` days after 2024-01-01. Valid for offsets within 2024.
fn order_date_2024(day_offset: usize) -> String {
    let mut remaining = day_offset;
    for (idx, days) in DAYS_IN_MONTH_2024.iter().enumerate() {
        if remaining < *days {
            return format!("2024-{:02}-{:02}", idx + 1, remaining + 1);
        }
        remaining -= days;
    }
    unreachable!("day offset {day_offset} exceeds one year");
}
