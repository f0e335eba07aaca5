//! Benchmarks for Damerau-Levenshtein neighborhood generation across query
//! lengths and k.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use taxamatch::alphabet::Alphabet;
use taxamatch::{generate_full, generate_k1_full, generate_k1_wildcard};

fn queries_by_length() -> Vec<&'static str> {
    vec!["tyto", "anaconda", "ictalurus", "megascopiatidae"]
}

fn bench_k1_full(c: &mut Criterion) {
    let alphabet = Alphabet::default_lowercase();
    let mut group = c.benchmark_group("generate_k1_full");
    for query in queries_by_length() {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, q| {
            b.iter(|| generate_k1_full(black_box(q), black_box(&alphabet)));
        });
    }
    group.finish();
}

fn bench_k2_full(c: &mut Criterion) {
    let alphabet = Alphabet::default_lowercase();
    let mut group = c.benchmark_group("generate_k2_full");
    for query in queries_by_length() {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, q| {
            b.iter(|| generate_full(black_box(q), 2, black_box(&alphabet)));
        });
    }
    group.finish();
}

fn bench_k1_wildcard(c: &mut Criterion) {
    let alphabet = Alphabet::default_lowercase();
    let mut group = c.benchmark_group("generate_k1_wildcard");
    for query in queries_by_length() {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, q| {
            b.iter(|| generate_k1_wildcard(black_box(q), black_box(&alphabet)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_k1_full, bench_k2_full, bench_k1_wildcard);
criterion_main!(benches);
