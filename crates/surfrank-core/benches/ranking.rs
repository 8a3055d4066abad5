//! Ranking performance benchmarks
//!
//! Measures performance of:
//! - Transition model construction
//! - Random-surfer sampling
//! - Fixed-point iteration

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use surfrank_core::{iterate_pagerank, sample_pagerank, transition_model, Corpus};

/// Ring of pages where every page also links to page 0, and the last page is a sink
fn build_corpus(size: usize) -> Corpus {
    let name = |i: usize| format!("{}.html", i);
    Corpus::from_links((0..size).map(|i| {
        let links: Vec<String> = if i == size - 1 {
            Vec::new()
        } else if i == 0 {
            vec![name(1)]
        } else {
            vec![name(i + 1), name(0)]
        };
        (name(i), links)
    }))
    .unwrap()
}

fn bench_transition(c: &mut Criterion) {
    let corpus = build_corpus(100);
    c.bench_function("transition_model_100", |b| {
        b.iter(|| transition_model(black_box(&corpus), black_box("50.html"), 0.85).unwrap())
    });
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_pagerank");
    for size in [10, 50, 100] {
        let corpus = build_corpus(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| sample_pagerank(black_box(corpus), 0.85, 1_000, &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_pagerank");
    for size in [10, 100, 1_000] {
        let corpus = build_corpus(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| iterate_pagerank(black_box(corpus), 0.85, 0.001).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transition, bench_sampling, bench_iteration);
criterion_main!(benches);
