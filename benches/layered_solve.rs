use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use em_waves::constants::angular_frequency;
use em_waves::grid::linspace;
use em_waves::layered::{solve, Slab, Stack};
use em_waves::medium::Medium;

fn build_slab_stack(slabs: usize) -> Stack {
    let interior = (0..slabs)
        .map(|i| Slab::new(Medium::new(2.0 + i as f64, 1.0e-9), 1.0e-3))
        .collect();
    Stack::new(Medium::vacuum(), interior, Medium::vacuum()).expect("valid stack")
}

fn bench_layered_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered_solve");
    let omega = angular_frequency(50.0e9);
    let positions = linspace(-0.01, 0.03, 2000);

    for slabs in [1usize, 4, 8] {
        let stack = build_slab_stack(slabs);
        group.bench_function(BenchmarkId::new("slabs", slabs), |b| {
            b.iter(|| {
                let _ = solve(&stack, omega, &positions).expect("solve succeeds");
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layered_solve);
criterion_main!(benches);
