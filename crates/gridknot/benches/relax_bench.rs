//! Criterion microbenches for relaxation steps.
//!
//! One step costs O(n²) in the vertex count (all-pairs forces plus the
//! segment guard), so sizes are kept small.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use gridknot::diagram::random_knot_diagram_seeded;
use gridknot::extract::extract_curve;
use gridknot::relax::{RelaxationEngine, SimulationParams};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("relax_step");
    for &(size, refine) in &[(5usize, 1usize), (5, 4), (10, 2)] {
        let curve = extract_curve(&random_knot_diagram_seeded(size, 123).unwrap())
            .unwrap()
            .refine(refine);
        let label = format!("n{size}_r{refine}_v{}", curve.len());
        group.bench_with_input(BenchmarkId::from_parameter(label), &curve, |b, curve| {
            b.iter_batched(
                || RelaxationEngine::new(curve.clone(), SimulationParams::default()).unwrap(),
                |mut eng| black_box(eng.step()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
