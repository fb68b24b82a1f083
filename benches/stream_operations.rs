use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use rusty_iterators::prelude::*;
use rusty_iterators::stream::{from_iter, from_slice};

fn random_input(size: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(-1_000..1_000)).collect()
}

fn bench_basic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_operations");

    for size in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("map_filter", size), size, |b, &size| {
            b.iter(|| {
                let result = from_iter(0..size)
                    .map(|x| black_box(x * 2))
                    .filter(|x| black_box(x % 4 == 0))
                    .collect()
                    .unwrap();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_map_filter", size), size, |b, &size| {
            b.iter(|| {
                let result: Vec<_> = (0..size).map(|x| black_box(x * 2)).filter(|x| black_box(x % 4 == 0)).collect();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("fold", size), size, |b, &size| {
            b.iter(|| {
                let result = from_iter(0..size).fold(0i64, |acc, x| black_box(acc + x as i64)).unwrap();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_window_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_operations");

    for size in [1_000, 10_000, 100_000].iter() {
        let input = random_input(*size);

        group.bench_with_input(BenchmarkId::new("moving_window_sum", size), &input, |b, input| {
            b.iter(|| {
                let result = from_slice(input)
                    .moving_window(8)
                    .map(|window| window.into_iter().sum::<i64>())
                    .max()
                    .unwrap();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_windows_sum", size), &input, |b, input| {
            b.iter(|| {
                let result = input.windows(8).map(|window| window.iter().sum::<i64>()).max();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("cycle_take", size), &input, |b, input| {
            b.iter(|| {
                let result = from_slice(input).cycle().take(input.len() * 3).count().unwrap();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("cache_cycle_take", size), &input, |b, input| {
            b.iter(|| {
                let result = from_slice(input).cache_cycle().take(input.len() * 3).count().unwrap();
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_basic_operations, bench_window_operations);
criterion_main!(benches);
