//! Criterion benchmarks for the greedy and exact selectors.
//!
//! Uses seeded random catalogs so runs are comparable across changes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_knapsack::catalog::{Catalog, GeneratorConfig};
use u_knapsack::{ExactConfig, ExactSelector, GreedySelector, Selector};

fn catalog(n: usize) -> Catalog {
    GeneratorConfig::new(n)
        .with_cost_range(1, 100)
        .with_value_range(1.0, 1000.0)
        .with_seed(42)
        .generate()
        .expect("valid generator config")
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n in &[100usize, 1_000, 10_000] {
        let catalog = catalog(n);
        let budget = catalog.total_cost() / 2;
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, cat| {
            b.iter(|| {
                let result = GreedySelector.select(black_box(cat), black_box(budget));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");
    group.sample_size(10);

    for (n, budget) in [(50usize, 1_000i64), (100, 5_000), (200, 10_000)] {
        let catalog = catalog(n);
        let selector = ExactSelector::default();
        group.bench_with_input(
            BenchmarkId::new(format!("n{n}"), budget),
            &(catalog, selector),
            |b, (cat, sel)| {
                b.iter(|| {
                    let result = sel.select(black_box(cat), black_box(budget));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_exact_value_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_value_only");
    group.sample_size(10);

    for (n, budget) in [(100usize, 5_000i64), (200, 10_000)] {
        let catalog = catalog(n);
        let selector = ExactSelector::default();
        group.bench_with_input(BenchmarkId::new(format!("n{n}"), budget), &catalog, |b, cat| {
            b.iter(|| {
                let result = selector.optimal_value(black_box(cat), black_box(budget));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_exact_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_parallel");
    group.sample_size(10);

    let catalog = catalog(200);
    for parallel in [false, true] {
        let selector = ExactSelector::new(ExactConfig::default().with_parallel(parallel));
        group.bench_with_input(
            BenchmarkId::from_parameter(parallel),
            &selector,
            |b, sel| {
                b.iter(|| {
                    let result = sel.select(black_box(&catalog), black_box(50_000));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_greedy,
    bench_exact,
    bench_exact_value_only,
    bench_exact_parallel
);
criterion_main!(benches);
