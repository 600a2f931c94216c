//! Criterion benchmarks for `sal-core`.
//!
//! The estimator is a single pass over the cells after totals and prior,
//! so table size is the only interesting axis.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sal_common::CountTable;
use sal_core::{weighted_log_odds, LogOddsConfig, PriorMode};

fn synthetic_table(groups: usize, features: usize) -> CountTable {
    let mut rows = Vec::with_capacity(groups * features);
    for g in 0..groups {
        for f in 0..features {
            // Deterministic, mildly skewed counts.
            let count = ((g * 31 + f * 17) % 211 + 1) as i64;
            rows.push((format!("g{g}"), format!("f{f}"), count));
        }
    }
    CountTable::from_rows(rows).unwrap()
}

fn bench_weighted_log_odds(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_log_odds");

    for (name, groups, features) in [
        ("small_4x50", 4, 50),
        ("medium_10x500", 10, 500),
        ("large_50x2000", 50, 2000),
    ] {
        let table = synthetic_table(groups, features);

        group.bench_with_input(BenchmarkId::new("empirical", name), &table, |b, t| {
            let config = LogOddsConfig::default();
            b.iter(|| black_box(weighted_log_odds(black_box(t), &config).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("uninformative", name), &table, |b, t| {
            let config = LogOddsConfig {
                prior: PriorMode::Uninformative,
                ..LogOddsConfig::default()
            };
            b.iter(|| black_box(weighted_log_odds(black_box(t), &config).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_weighted_log_odds);
criterion_main!(benches);
