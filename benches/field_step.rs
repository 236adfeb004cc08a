//! Stepper throughput at a few field sizes.
//!
//! Run with: `cargo bench --bench field_step`

use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ringfield::{FieldConfig, ParticleField};

const FRAME: Duration = Duration::from_millis(16);

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_step");
    for count in [300usize, 1_000, 5_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let config = FieldConfig {
                count,
                auto_animate: true,
                rotation_speed: 0.3,
                ..Default::default()
            };
            let mut field = ParticleField::with_seed(config, 1).expect("valid config");
            field.start();
            b.iter(|| {
                field.step(FRAME);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
