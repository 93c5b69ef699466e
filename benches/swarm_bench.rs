//! Criterion benchmarks for the swarm-metaheur optimizers.
//!
//! Uses synthetic instances (random city clouds, a multimodal
//! one-dimensional objective) to measure pure algorithm overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swarm_metaheur::aco::{AcoConfig, AcoRunner, City, TspInstance};
use swarm_metaheur::cuckoo::{CuckooConfig, CuckooRunner};
use swarm_metaheur::ga::{GaConfig, GaRunner};
use swarm_metaheur::pso::{PsoConfig, PsoRunner};

fn random_cities(n: usize, seed: u64) -> Vec<City> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| City::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect()
}

fn random_distances(n: usize, seed: u64) -> Array2<f64> {
    let cities = random_cities(n, seed);
    Array2::from_shape_fn((n, n), |(i, j)| cities[i].distance_to(&cities[j]))
}

fn bench_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco");
    group.sample_size(10);

    for n_cities in [10usize, 25, 50] {
        let instance = TspInstance::new(random_cities(n_cities, 42)).unwrap();
        let config = AcoConfig::default()
            .with_n_ants(20)
            .with_n_iterations(30)
            .with_seed(42)
            .with_parallel(false);

        group.bench_with_input(
            BenchmarkId::from_parameter(n_cities),
            &instance,
            |b, instance| b.iter(|| AcoRunner::run(black_box(instance), &config)),
        );
    }

    group.finish();
}

fn bench_aco_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_parallel");
    group.sample_size(10);

    let instance = TspInstance::new(random_cities(50, 42)).unwrap();
    for parallel in [false, true] {
        let config = AcoConfig::default()
            .with_n_ants(50)
            .with_n_iterations(20)
            .with_seed(42)
            .with_parallel(parallel);

        group.bench_with_input(
            BenchmarkId::from_parameter(parallel),
            &config,
            |b, config| b.iter(|| AcoRunner::run(black_box(&instance), config)),
        );
    }

    group.finish();
}

fn bench_cuckoo(c: &mut Criterion) {
    let mut group = c.benchmark_group("cuckoo");
    group.sample_size(10);

    for n_cities in [10usize, 25, 50] {
        let distances = random_distances(n_cities, 42);
        let config = CuckooConfig::default()
            .with_n_nests(20)
            .with_max_iterations(100)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::from_parameter(n_cities),
            &distances,
            |b, distances| b.iter(|| CuckooRunner::run(black_box(distances), &config).unwrap()),
        );
    }

    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);

    for generations in [50usize, 200] {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_generations(generations)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::from_parameter(generations),
            &config,
            |b, config| {
                b.iter(|| {
                    GaRunner::run(
                        |x| black_box(x) * (10.0 * std::f64::consts::PI * x).sin() + 1.0,
                        config,
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_pso(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso");
    group.sample_size(10);

    for dimensions in [5usize, 20] {
        let config = PsoConfig::default()
            .with_dimensions(dimensions)
            .with_swarm_size(30)
            .with_max_iterations(100)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::from_parameter(dimensions),
            &config,
            |b, config| {
                b.iter(|| PsoRunner::run(|x| black_box(x).iter().map(|v| v * v).sum(), config))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_aco,
    bench_aco_parallel,
    bench_cuckoo,
    bench_ga,
    bench_pso
);
criterion_main!(benches);
