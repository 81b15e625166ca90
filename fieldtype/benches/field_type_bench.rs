//! Benchmarks for validation and cached activation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fieldtype::prelude::*;

fn is_type_of_benchmark(c: &mut Criterion) {
    let registry = FieldRegistry::new();
    let number = registry.number();
    let numbers = array_of(number);
    let list = Value::array((0..1_000).map(Value::from));

    c.bench_function("primitive_is_type_of", |b| {
        b.iter(|| number.is_type_of(black_box(&Value::from(42))))
    });

    c.bench_function("array_of_1000_is_type_of", |b| {
        b.iter(|| numbers.is_type_of(black_box(&list)))
    });
}

fn activation_benchmark(c: &mut Criterion) {
    let registry = FieldRegistry::new();
    let number = registry.number();

    c.bench_function("cached_activation", |b| {
        b.iter(|| {
            number
                .optional()
                .and_then(|v| v.integer())
                .map(|v| black_box(v.selector()))
        })
    });
}

criterion_group!(benches, is_type_of_benchmark, activation_benchmark);
criterion_main!(benches);
