//! Benchmarks: filter → grouped summary over generated sales rows.
//! Run with: cargo bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use polars::prelude::{col, lit};

use dataframe_processing::processor::DataProcessor;
use dataframe_processing::sales::{SalesPipeline, SalesPipelineOptions};

fn bench_filter_summary(c: &mut Criterion, n: usize) {
    let pipeline = SalesPipeline::new(SalesPipelineOptions {
        data_dir: "data".into(),
        orders: n,
        customers: 100,
    });
    let sales = pipeline.generate_sales().expect("generate_sales");
    let processor = DataProcessor::new();

    c.bench_function(&format!("filter_summary_{n}"), |b| {
        b.iter(|| {
            let filtered = processor
                .filter(black_box(&sales), col("price").gt(lit(30.0)))
                .expect("filter");
            let stats = processor
                .summary_statistics(&filtered, "category", "price")
                .expect("summary_statistics");
            black_box(stats)
        })
    });
}

fn bench_pipelines(c: &mut Criterion) {
    bench_filter_summary(c, 10_000);
    bench_filter_summary(c, 100_000);
}

criterion_group!(benches, bench_pipelines);
criterion_main!(benches);
