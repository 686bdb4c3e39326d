use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use beap::Beap;

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

fn random_values(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<i64> = (0..n as i64).collect();
    values.shuffle(&mut rng);
    values
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Beap::insert");
    for &n in &SIZES {
        let values = random_values(n, n as u64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut beap = Beap::new();
                for v in values {
                    beap.insert(*v);
                }
                beap
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Beap::search");
    for &n in &SIZES {
        let values = random_values(n, n as u64);
        let mut beap = Beap::new();
        for v in &values {
            beap.insert(*v);
        }
        let probes = random_values(n, n as u64 + 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &probes, |b, probes| {
            b.iter(|| {
                for p in probes.iter().take(1_000) {
                    std::hint::black_box(beap.search(p));
                }
            })
        });
    }
    group.finish();
}

fn bench_delete_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("Beap::delete_root");
    for &n in &SIZES {
        let values = random_values(n, n as u64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter_batched(
                || {
                    let mut beap = Beap::new();
                    for v in values {
                        beap.insert(*v);
                    }
                    beap
                },
                |mut beap| {
                    for _ in 0..1_000.min(beap.len()) {
                        beap.delete(0, 0);
                    }
                    beap
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_delete_root);
criterion_main!(benches);
