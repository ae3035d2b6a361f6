//! Criterion benchmarks for the Monte Carlo pricer.
//!
//! Benchmarks cover:
//! - MT19937 and Box–Muller throughput
//! - European option pricing with varying path counts
//! - Greeks by bump-and-revalue (four pricings per estimate)

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_mc::greeks::{GreeksConfig, GreeksEstimator};
use pricer_mc::mc::{GbmParams, MonteCarloConfig, MonteCarloPricer, PayoffParams};
use pricer_mc::rng::{MersenneTwister, PricerRng};

fn pricer(n_paths: usize, n_steps: usize) -> MonteCarloPricer {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .seed(42)
        .build()
        .unwrap();
    MonteCarloPricer::new(config).unwrap()
}

/// Benchmark raw generator and normal transform throughput.
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("mt19937_u32", n_samples),
            &n_samples,
            |b, &n| {
                let mut mt = MersenneTwister::from_seed(42);
                b.iter(|| {
                    let mut acc = 0u32;
                    for _ in 0..n {
                        acc ^= mt.next_u32();
                    }
                    black_box(acc)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("normal_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark pricing with varying path counts.
fn bench_mc_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_pricing");
    group.sample_size(20);

    let gbm = GbmParams::default();
    let payoff = PayoffParams::put(100.0);

    for n_paths in [1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("european_put_252_steps", n_paths),
            &n_paths,
            |b, &n| {
                let mut pricer = pricer(n, 252);
                b.iter(|| pricer.price_european(black_box(gbm), black_box(payoff)));
            },
        );
    }

    group.finish();
}

/// Benchmark finite-difference Greeks.
fn bench_greeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("greeks");
    group.sample_size(10);

    let gbm = GbmParams::default();
    let payoff = PayoffParams::put(100.0);

    for n_paths in [1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("bump_and_revalue", n_paths),
            &n_paths,
            |b, &n| {
                let mut estimator =
                    GreeksEstimator::new(pricer(n, 252), GreeksConfig::default()).unwrap();
                b.iter(|| estimator.estimate(black_box(gbm), black_box(payoff)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_rng_generation, bench_mc_pricing, bench_greeks);
criterion_main!(benches);
