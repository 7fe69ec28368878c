//! Criterion benchmarks for the fractional knapsack solver.
//!
//! Uses seeded random scenarios so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_knapsack::demo::random_scenario;
use u_knapsack::knapsack::ratio_order;
use u_knapsack::scenario::solve_all;

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for &n in &[10usize, 100, 1_000, 10_000] {
        let scenario = random_scenario(n, 42);
        let solver = scenario.solver().expect("valid capacity");
        group.bench_with_input(BenchmarkId::from_parameter(n), &scenario, |b, s| {
            b.iter(|| solver.solve(black_box(&s.items)))
        });
    }
    group.finish();
}

fn bench_ratio_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratio_order");
    for &n in &[100usize, 10_000] {
        let scenario = random_scenario(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &scenario, |b, s| {
            b.iter(|| ratio_order(black_box(&s.items)))
        });
    }
    group.finish();
}

fn bench_solve_all(c: &mut Criterion) {
    let scenarios: Vec<_> = (0..64).map(|seed| random_scenario(500, seed)).collect();
    c.bench_function("solve_all/64x500", |b| {
        b.iter(|| solve_all(black_box(&scenarios)))
    });
}

criterion_group!(benches, bench_solve, bench_ratio_order, bench_solve_all);
criterion_main!(benches);
