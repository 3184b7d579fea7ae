use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use transposon_sim::genome::GenomeKind;
use transposon_sim::simulation::{Simulation, SimulationParams};

fn bench_simulation_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_run");
    let size = 100_000;
    let steps = 200;

    group.throughput(Throughput::Elements(steps as u64));
    group.sample_size(10);

    for kind in GenomeKind::ALL {
        group.bench_with_input(BenchmarkId::new("run", kind), &kind, |b, &kind| {
            b.iter(|| {
                let mut sim =
                    Simulation::new(kind, size, SimulationParams::default(), Some(42)).unwrap();
                black_box(sim.run(black_box(steps)).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulation_run);
criterion_main!(benches);
