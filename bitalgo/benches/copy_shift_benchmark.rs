use bitalgo::{BitCursor, copy, fill_random, shift_left, shift_right};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::*;

fn random_words(count: usize) -> Vec<u64> {
    let mut words = vec![0u64; count];
    fill_random(&mut words, &mut thread_rng());
    words
}

pub fn copy_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("copy");
    for size in [64usize, 1024, 16384] {
        for (source_offset, destination_offset) in [(0usize, 0usize), (0, 13), (29, 0), (29, 13)] {
            let parameter = format!("{size}w/{source_offset}->{destination_offset}");
            group.bench_with_input(BenchmarkId::from_parameter(parameter), &size, |bencher, &size| {
                let src = random_words(size + 1);
                let mut dst = vec![0u8; (size + 1) * 8];
                let first = BitCursor::new(0, source_offset);
                let last = BitCursor::new(size, source_offset);
                bencher.iter(|| copy(&src, first, last, &mut dst, BitCursor::new(0, destination_offset)));
            });
        }
    }
    group.finish();
}

pub fn shift_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("shift");
    for size in [64usize, 1024, 16384] {
        for amount in [1usize, 64, 100] {
            let parameter = format!("{size}w/{amount}");
            group.bench_with_input(BenchmarkId::new("left", &parameter), &size, |bencher, &size| {
                bencher.iter_batched(
                    || random_words(size),
                    |mut words| shift_left(&mut words, BitCursor::new(0, 3), BitCursor::new(size - 1, 60), amount),
                    BatchSize::SmallInput,
                );
            });
            group.bench_with_input(BenchmarkId::new("right", &parameter), &size, |bencher, &size| {
                bencher.iter_batched(
                    || random_words(size),
                    |mut words| shift_right(&mut words, BitCursor::new(0, 3), BitCursor::new(size - 1, 60), amount),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, copy_benchmark, shift_benchmark);
criterion_main!(benches);
