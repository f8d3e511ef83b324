use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use pairsort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn random_columns(count: usize, key_range: i32) -> (Vec<i32>, Vec<i32>) {
    let mut rng = rand::rng();
    let keys = (0..count).map(|_| rng.random_range(0..key_range)).collect();
    let ties = (0..count).map(|_| rng.random()).collect();
    (keys, ties)
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Pairs");
    group.sample_size(10);

    let input = random_columns(1_000, i32::MAX);

    group.bench_function("pair_sort (in-place)", |b| {
        b.iter_batched(
            || input.clone(),
            |(mut keys, mut ties)| pair_sort(black_box(&mut keys), black_box(&mut ties)),
            BatchSize::SmallInput,
        )
    });

    // Std Sort Unstable on zipped pairs, including the zip and unzip.
    group.bench_function("slice::sort_unstable (zipped)", |b| {
        b.iter_batched(
            || input.clone(),
            |(keys, ties)| {
                let mut pairs: Vec<(i32, i32)> = keys.into_iter().zip(ties).collect();
                pairs.sort_unstable_by(|a, b| compare_pairs(*a, *b));
                let (keys, ties): (Vec<i32>, Vec<i32>) = pairs.into_iter().unzip();
                black_box((keys, ties))
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_duplicate_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("Duplicate Keys");
    group.sample_size(10);

    // Few distinct keys, so most comparisons fall through to the tie-breaker.
    let input = random_columns(1_000, 4);

    group.bench_function("pair_sort (in-place)", |b| {
        b.iter_batched(
            || input.clone(),
            |(mut keys, mut ties)| pair_sort(black_box(&mut keys), black_box(&mut ties)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_random, bench_duplicate_keys);
criterion_main!(benches);
