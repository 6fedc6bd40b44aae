use polars::prelude::DataType;

use dataframe_processing::sales::{SalesPipeline, SalesPipelineOptions};

fn small_pipeline(data_dir: std::path::PathBuf) -> SalesPipeline {
    SalesPipeline::new(SalesPipelineOptions {
        data_dir,
        orders: 60,
        customers: 10,
    })
}

/// Total sale value the generator formulas produce for `orders` rows.
fn expected_revenue(orders: usize) -> f64 {
    (0..orders)
        .map(|i| {
            let price = 10.0 + (i % 50) as f64 + (i % 10) as f64 * 0.5;
            let quantity = (1 + i % 5) as f64;
            price * quantity
        })
        .sum()
}

#[test]
fn generation_is_deterministic_with_expected_shapes() {
    let pipeline = small_pipeline("unused".into());

    let sales = pipeline.generate_sales().unwrap();
    let customers = pipeline.generate_customers().unwrap();

    assert_eq!(sales.shape(), (60, 7));
    assert_eq!(customers.shape(), (10, 3));

    // Index-derived columns.
    let products = sales.column("product").unwrap().str().unwrap();
    assert_eq!(products.get(13), Some("Product_3"));
    let prices = sales.column("price").unwrap().f64().unwrap();
    assert_eq!(prices.get(7), Some(20.5));
    let quantities = sales.column("quantity").unwrap().i64().unwrap();
    assert_eq!(quantities.get(9), Some(5));
    let dates = sales.column("order_date").unwrap().str().unwrap();
    assert_eq!(dates.get(0), Some("2024-01-01"));
    assert_eq!(dates.get(59), Some("2024-02-29"));

    let statuses = customers.column("loyalty_status").unwrap().str().unwrap();
    assert_eq!(statuses.get(0), Some("Gold"));
    assert_eq!(statuses.get(5), Some("Silver"));
    assert_eq!(statuses.get(7), Some("Bronze"));

    // Same options, same frames.
    assert!(sales.equals_missing(&pipeline.generate_sales().unwrap()));
    assert!(customers.equals_missing(&pipeline.generate_customers().unwrap()));
}

#[test]
fn write_and_load_roundtrip_preserves_both_tables() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = small_pipeline(dir.path().join("data"));

    let (sales, customers) = pipeline.write_sample_data().unwrap();
    let (sales_back, customers_back) = pipeline.load_sample_data().unwrap();

    assert!(sales_back.equals_missing(&sales));
    assert!(customers_back.equals_missing(&customers));
}

#[test]
fn report_aggregates_are_consistent_with_the_generator() {
    let pipeline = small_pipeline("unused".into());
    let sales = pipeline.generate_sales().unwrap();
    let customers = pipeline.generate_customers().unwrap();

    let report = pipeline.process(&sales, &customers).unwrap();
    let expected_total = expected_revenue(60);

    // Category x region summary: at most 3 x 4 groups, revenue sums to the
    // grand total, order counts sum to the row count (left join keeps all).
    assert!(report.summary.height() <= 12);
    let revenue: f64 = report
        .summary
        .column("total_revenue")
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .sum();
    assert!((revenue - expected_total).abs() < 1e-9);
    let orders: u32 = report
        .summary
        .column("number_of_orders")
        .unwrap()
        .u32()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .sum();
    assert_eq!(orders, 60);

    // Summary is sorted by revenue descending.
    let revenues: Vec<f64> = report
        .summary
        .column("total_revenue")
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect();
    assert!(revenues.windows(2).all(|w| w[0] >= w[1]));

    // Top customers: five rows, sorted by spend descending.
    assert_eq!(report.top_customers.height(), 5);
    let spends: Vec<f64> = report
        .top_customers
        .column("total_spent")
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect();
    assert!(spends.windows(2).all(|w| w[0] >= w[1]));

    // Daily revenue: real date column, totals match the grand total.
    assert_eq!(
        report.daily_revenue.column("day").unwrap().dtype(),
        &DataType::Date
    );
    let daily_total: f64 = report
        .daily_revenue
        .column("daily_revenue")
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .sum();
    assert!((daily_total - expected_total).abs() < 1e-9);
    // 60 orders over distinct consecutive dates.
    assert_eq!(report.daily_revenue.height(), 60);
}
