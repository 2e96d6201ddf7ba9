//! Performance benchmarks for membench-matrix
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use membench_matrix::config::MatrixConfig;
use membench_matrix::core::Generator;
use membench_matrix::orchestrator::natural_cmp;
use membench_matrix::render::{config_name, render_definition};
use membench_matrix::workload::WorkloadSpace;
use tempfile::TempDir;

fn bench_enumerate(c: &mut Criterion) {
    let matrix = MatrixConfig::default();
    let topologies = matrix.topologies();
    let space = WorkloadSpace::new(&topologies, &matrix.dimensions);

    c.bench_function("enumerate_stock_matrix", |b| {
        b.iter(|| black_box(space.iter().count()));
    });

    c.bench_function("name_stock_matrix", |b| {
        b.iter(|| {
            for w in space.iter() {
                black_box(config_name(&w));
            }
        });
    });

    c.bench_function("render_stock_matrix", |b| {
        b.iter(|| {
            for w in space.iter() {
                black_box(render_definition(&w));
            }
        });
    });
}

fn bench_natural_sort(c: &mut Criterion) {
    let matrix = MatrixConfig::default();
    let topologies = matrix.topologies();
    let space = WorkloadSpace::new(&topologies, &matrix.dimensions);
    let mut names: Vec<String> = space.iter().map(|w| config_name(&w)).collect();
    names.reverse();

    c.bench_function("natural_sort_5400_names", |b| {
        b.iter(|| {
            let mut sorted = names.clone();
            sorted.sort_by(|a, b| natural_cmp(a, b));
            black_box(sorted);
        });
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(10);

    group.bench_function("write_stock_matrix", |b| {
        b.iter(|| {
            let dir = TempDir::new().unwrap();
            let result = Generator::new(MatrixConfig::default(), dir.path())
                .quiet()
                .execute()
                .unwrap();
            black_box(result.workloads);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_enumerate, bench_natural_sort, bench_generate);
criterion_main!(benches);
