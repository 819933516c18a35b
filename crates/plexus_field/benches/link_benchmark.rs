//! Benchmark for the O(n²) link pass.
//!
//! TARGET: one full step + draw well under a 16.6ms frame budget
//!
//! Run with: cargo bench --package plexus_field --bench link_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use plexus_field::{FieldConfig, ParticleField};
use plexus_surface::CommandSurface;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn benchmark_step(c: &mut Criterion) {
    let mut field = ParticleField::new(FieldConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    field.init(&mut rng, 1920.0, 1080.0);

    c.bench_function("field_step_80_particles", |b| {
        b.iter(|| {
            field.step();
            black_box(field.particles().len())
        });
    });
}

fn benchmark_draw(c: &mut Criterion) {
    let mut field = ParticleField::new(FieldConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    field.init(&mut rng, 1920.0, 1080.0);
    let mut surface = CommandSurface::new(1920.0, 1080.0);

    // 80 particles = 3160 pair checks per frame.
    let mut group = c.benchmark_group("link_pass");
    group.throughput(Throughput::Elements(3160));

    group.bench_function("draw_80_particles", |b| {
        b.iter(|| {
            field.draw(&mut surface);
            black_box(surface.commands().len())
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_step, benchmark_draw);
criterion_main!(benches);
