//! Benchmarks for the spark field
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jadwal::fx::{FxConfig, NullSurface, ParticleField};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn full_field(cap: usize) -> ParticleField<SmallRng> {
    let config = FxConfig {
        max_particles: cap,
        // Long-lived sparks so the field stays full while iterating
        life: jadwal::fx::Span::new(1.0e9, 2.0e9),
        ..FxConfig::default()
    };
    let mut field = ParticleField::new(config, SmallRng::seed_from_u64(42));
    field.resize(1920.0, 1080.0);
    while field.on_spawn_timer() {}
    field
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for cap in [100, 900, 5000] {
        let mut field = full_field(cap);
        group.throughput(Throughput::Elements(cap as u64));

        group.bench_function(format!("step_{}", cap), |b| {
            b.iter(|| field.frame(black_box(&mut NullSurface)))
        });
    }

    group.finish();
}

fn bench_spawn(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn");

    group.bench_function("burst", |b| {
        let mut field = ParticleField::new(
            FxConfig {
                max_particles: usize::MAX,
                ..FxConfig::default()
            },
            SmallRng::seed_from_u64(7),
        );
        field.resize(1920.0, 1080.0);

        b.iter(|| {
            if field.len() > 100_000 {
                field = ParticleField::new(field.config().clone(), SmallRng::seed_from_u64(7));
                field.resize(1920.0, 1080.0);
            }
            black_box(field.spawn_burst())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_frame, bench_spawn);
criterion_main!(benches);
