use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use passgate_validator::prelude::*;

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    group.bench_function("valid", |b| {
        b.iter(|| evaluate(black_box("Test123!"), black_box("Test123!"), None));
    });

    group.bench_function("all_failing", |b| {
        b.iter(|| evaluate(black_box(" "), black_box(""), None));
    });

    let overrides = MessageOverrides::new()
        .with(RuleId::Mismatch, "Passwords don't match")
        .with(RuleId::Special, "Add a symbol");
    group.bench_function("with_overrides", |b| {
        b.iter(|| evaluate(black_box("test"), black_box("test"), Some(&overrides)));
    });

    let long = "aA1".repeat(4096);
    group.bench_function("long_input", |b| {
        b.iter(|| evaluate(black_box(&long), black_box(&long), None));
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
