use criterion::{criterion_group, criterion_main, Criterion};

use lapse_core::review::ReviewRecord;
use lapse_decay::DecayEngine;
use test_fixtures::{reference_now, review};

/// 10K reviews spread over three years with short adjustment histories.
fn build_reviews(n: i64) -> Vec<ReviewRecord> {
    let now = reference_now();
    (0..n)
        .map(|i| {
            let changes: Vec<i32> = (0..(i % 5)).map(|j| if j % 2 == 0 { 1 } else { -1 }).collect();
            review(&format!("r{i}"), (i % 11) as f64, now, i % 1095, &changes)
        })
        .collect()
}

fn bench_score_single(c: &mut Criterion) {
    let engine = DecayEngine::default();
    let now = reference_now();
    let record = review("single", 8.0, now, 120, &[1, -1, 1]);

    c.bench_function("score_single", |b| {
        b.iter(|| engine.score(&record, now));
    });
}

fn bench_score_batch_10k(c: &mut Criterion) {
    let engine = DecayEngine::default();
    let now = reference_now();
    let records = build_reviews(10_000);

    c.bench_function("score_batch_10k", |b| {
        b.iter(|| engine.score_batch(&records, now));
    });
}

criterion_group!(benches, bench_score_single, bench_score_batch_10k);
criterion_main!(benches);
