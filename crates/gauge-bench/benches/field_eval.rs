//! Criterion benchmarks for derived-field evaluation on reference chunks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gauge_bench::{reference_chunk, reference_registry, stress_chunk};
use gauge_core::FieldName;
use gauge_units::UnitSystem;

fn gas(name: &str) -> FieldName {
    FieldName::new("gas", name)
}

fn bench_pointwise_32(c: &mut Criterion) {
    let system = UnitSystem::cgs();
    let chunk = reference_chunk(42, &system);
    let reg = reference_registry(system);

    for name in ["magnetic_field_strength", "magnetic_energy", "plasma_beta"] {
        let field = gas(name);
        c.bench_function(&format!("{name}_32"), |b| {
            b.iter(|| {
                let q = reg.evaluate(black_box(&field), &chunk).unwrap();
                black_box(&q);
            });
        });
    }
}

fn bench_curl_32(c: &mut Criterion) {
    for system in [UnitSystem::cgs(), UnitSystem::mks()] {
        let label = system.name().to_string();
        let chunk = reference_chunk(42, &system);
        let reg = reference_registry(system);
        let field = gas("current_density_x");
        c.bench_function(&format!("current_density_x_32_{label}"), |b| {
            b.iter(|| {
                let q = reg.evaluate(black_box(&field), &chunk).unwrap();
                black_box(&q);
            });
        });
    }
}

fn bench_current_magnitude_96(c: &mut Criterion) {
    let system = UnitSystem::cgs();
    let chunk = stress_chunk(7, &system);
    let reg = reference_registry(system);
    let field = gas("current_density_magnitude");

    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("current_density_magnitude_96", |b| {
        b.iter(|| {
            let q = reg.evaluate(black_box(&field), &chunk).unwrap();
            black_box(&q);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_pointwise_32,
    bench_curl_32,
    bench_current_magnitude_96
);
criterion_main!(benches);
