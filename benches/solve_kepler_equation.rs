use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orbital_engine::kepler::{eccentric_anomaly, solve_parabolic_cubic, true_anomaly};

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

/// Planet-like regime: e ∈ [0.0, 0.25]
fn bench_planetary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("eccentric_anomaly/planetary_e<=0.25", |b| {
        b.iter_batched(
            || {
                // Pre-generate inputs to avoid RNG cost in the timed section
                (0..samples)
                    .map(|_| (rand_angle(&mut rng), rng.random_range(0.0..=0.25)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (m, e) in cases {
                    black_box(eccentric_anomaly(black_box(m), black_box(e)).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Comet-like regime: e ∈ [0.8, 0.97], Newton starts at π
fn bench_cometary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("eccentric_anomaly/cometary_e_0.8..0.97", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rand_angle(&mut rng), rng.random_range(0.8..0.97)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (m, e) in cases {
                    let _ = black_box(true_anomaly(black_box(m), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Barker's equation over a year either side of perihelion
fn bench_parabolic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let samples = 10_000usize;

    c.bench_function("solve_parabolic_cubic/one_year", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| 0.0364911624 * rng.random_range(-365.0..365.0))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for w in cases {
                    black_box(solve_parabolic_cubic(black_box(w)).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Halley's comet at the start of 1984, the slowest case of the catalog.
fn bench_fixed_halley(c: &mut Criterion) {
    let m = 6.108_6_f64;
    let e = 0.9673_f64;

    c.bench_function("eccentric_anomaly/fixed_halley", |b| {
        b.iter(|| {
            let f = eccentric_anomaly(black_box(m), black_box(e));
            black_box(f.ok());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_cometary, bench_parabolic, bench_fixed_halley
);
criterion_main!(benches);
