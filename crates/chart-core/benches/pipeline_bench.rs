use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use status_chart_core::{build_chart, normalize, ChartConfig, MetricReading, RawRecord};

const STATUSES: [&str; 3] = ["GOOD", "WARNING", "ERROR"];

fn gen_records(n: usize, metrics: usize) -> Vec<RawRecord> {
    (0..n)
        .map(|i| {
            (0..metrics).fold(RawRecord::new(i as f64), |rec, m| {
                // metrics report on staggered intervals so the timeline has gaps
                if i % (m + 1) != 0 {
                    return rec;
                }
                let value = ((i as f64 * 0.01).sin() * 50.0 + 50.0).to_string();
                let status = STATUSES[(i / 7 + m) % STATUSES.len()];
                rec.with_reading(format!("metric_{m}"), MetricReading::new(value, (i as i64) * 1000, status))
            })
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let cfg = ChartConfig::default();
    let mut group = c.benchmark_group("pipeline");
    for &n in &[1_000usize, 10_000usize] {
        let records = gen_records(n, 8);
        group.bench_with_input(BenchmarkId::new("normalize", n), &records, |b, r| {
            b.iter(|| black_box(normalize(r)));
        });
        let metrics = normalize(&records);
        group.bench_with_input(BenchmarkId::new("build", n), &metrics, |b, m| {
            b.iter_batched(|| cfg.clone(), |cfg| black_box(build_chart(m, &cfg)), BatchSize::SmallInput);
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
