use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use transposon_sim::TeId;
use transposon_sim::genome::{Genome, GenomeKind};

/// Genome of `n` slots with one short active TE near the middle.
fn seeded_genome(kind: GenomeKind, n: usize) -> Box<dyn Genome> {
    let mut genome = kind.build(n).unwrap();
    genome.insert_te(n / 2, 10).unwrap();
    genome
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_te");

    for &n in &[10_000usize, 100_000] {
        for kind in GenomeKind::ALL {
            // Near the front: cheap for linked, a full shift for dense.
            group.bench_with_input(BenchmarkId::new(format!("{kind}/front"), n), &n, |b, &n| {
                b.iter_batched(
                    || kind.build(n).unwrap(),
                    |mut genome| {
                        black_box(genome.insert_te(black_box(1), black_box(50)).unwrap());
                        genome
                    },
                    BatchSize::LargeInput,
                )
            });

            // Middle of the ring: the worst walk for linked.
            group.bench_with_input(BenchmarkId::new(format!("{kind}/middle"), n), &n, |b, &n| {
                b.iter_batched(
                    || kind.build(n).unwrap(),
                    |mut genome| {
                        black_box(genome.insert_te(black_box(n / 2), black_box(50)).unwrap());
                        genome
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }

    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_te");
    let n = 100_000;

    for &offset in &[10isize, 1_000, -25_000] {
        for kind in GenomeKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.to_string(), offset),
                &offset,
                |b, &offset| {
                    b.iter_batched(
                        || seeded_genome(kind, n),
                        |mut genome| {
                            black_box(genome.copy_te(TeId(0), black_box(offset)));
                            genome
                        },
                        BatchSize::LargeInput,
                    )
                },
            );
        }
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let n = 100_000;

    for kind in GenomeKind::ALL {
        let mut genome = seeded_genome(kind, n);
        for i in 0..100 {
            genome.copy_te(TeId(i), 997);
        }
        group.bench_function(kind.to_string(), |b| {
            b.iter(|| black_box(genome.to_string()))
        });
        group.bench_function(format!("{kind}/active_tes"), |b| {
            b.iter(|| black_box(genome.active_tes()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_copy, bench_render);
criterion_main!(benches);
