//! Benchmarks for ranking and comparison over record snapshots.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortrank::{AlgorithmId, MetricsRecord, RunSet, Scoreboard, compare, rank};
use std::hint::black_box;

fn create_records(count: usize, unmeasured_every: usize) -> Vec<MetricsRecord> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..count)
        .map(|i| {
            let id = AlgorithmId::ALL[i % AlgorithmId::ALL.len()];
            if unmeasured_every > 0 && i % unmeasured_every == 0 {
                MetricsRecord::unmeasured(id)
            } else {
                MetricsRecord::new(
                    id,
                    rng.random_range(0..1_000_000),
                    rng.random_range(0..1_000_000),
                    rng.random_range(0.01..1_000.0),
                )
            }
        })
        .collect()
}

fn benchmark_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for count in [11, 1_000, 100_000].iter() {
        let records = create_records(*count, 7);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| rank(black_box(&records)))
        });
    }

    group.finish();
}

fn benchmark_compare(c: &mut Criterion) {
    let records = create_records(1_000, 0);
    let baseline = MetricsRecord::new(AlgorithmId::Quick, 0, 0, 120.0);

    c.bench_function("compare_all", |b| {
        b.iter(|| {
            records
                .iter()
                .filter_map(|r| compare(black_box(r), black_box(&baseline)))
                .count()
        })
    });
}

fn benchmark_scoreboard(c: &mut Criterion) {
    let runs = RunSet::from_records(create_records(AlgorithmId::ALL.len(), 5)).unwrap();

    c.bench_function("scoreboard_build", |b| {
        b.iter(|| Scoreboard::build(black_box(&runs), Some(AlgorithmId::Merge)))
    });
}

criterion_group!(
    benches,
    benchmark_rank,
    benchmark_compare,
    benchmark_scoreboard
);
criterion_main!(benches);
