use criterion::{criterion_group, criterion_main, Criterion};
use foldcmp::compare::Reporter;
use foldcmp::config::ReportSettings;
use foldcmp::table::MetricTable;
use std::hint::black_box;

fn build_tables(n: usize) -> (MetricTable, MetricTable) {
    let mut a = MetricTable::new();
    let mut b = MetricTable::new();
    for i in 0..n {
        let id = format!("{:04x}", i);
        a.insert(id.clone(), (i % 17) as f64 * 0.37).unwrap();
        b.insert(id, (i % 13) as f64 * 0.41).unwrap();
    }
    (a, b)
}

fn bench_compare(c: &mut Criterion) {
    let (a, b) = build_tables(5_000);
    let reporter = Reporter::new(ReportSettings::default()).unwrap();

    c.bench_function("compare_5k", |bench| {
        bench.iter(|| reporter.compare(black_box(&a), black_box(&b)).unwrap())
    });

    let comparison = reporter.compare(&a, &b).unwrap();
    c.bench_function("render_5k", |bench| bench.iter(|| black_box(&comparison).render()));
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
