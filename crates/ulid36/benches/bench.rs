use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};
use ulid36::{
    BasicMonoUlid36Generator, BasicUlid36Generator, LockMonoUlid36Generator, RandSource,
    SystemClock, ThreadRandom, TimeSource, Ulid36, Ulid36Generator, decode_time, increment,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource<u64> for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

fn bench_generator<G, T, R>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    G: Ulid36Generator<T, R>,
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id().unwrap());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

fn bench_generator_contended<G, T, R>(
    c: &mut Criterion,
    group_name: &str,
    generator_fn: impl Fn() -> G,
) where
    G: Ulid36Generator<T, R> + Send + Sync,
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8] {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let generator = Arc::new(generator_fn());
                    let barrier = Arc::new(Barrier::new(thread_count + 1));
                    scope(|s| {
                        for _ in 0..thread_count {
                            let generator = Arc::clone(&generator);
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..ids_per_thread {
                                    black_box(generator.next_id().unwrap());
                                }
                            });
                        }
                        barrier.wait();
                    });
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

fn benchmark_mock_sequential_basic(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/basic", || {
        BasicUlid36Generator::new(FixedMockTime { millis: 1 }, ThreadRandom)
    });
}

/// Every call after the first increments the suffix.
fn benchmark_mock_sequential_basic_mono(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/basic_mono", || {
        BasicMonoUlid36Generator::new(FixedMockTime { millis: 1 }, ThreadRandom)
    });
}

fn benchmark_mock_sequential_lock_mono(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/lock_mono", || {
        LockMonoUlid36Generator::new(FixedMockTime { millis: 1 }, ThreadRandom)
    });
}

fn benchmark_mock_contended_lock_mono(c: &mut Criterion) {
    bench_generator_contended(c, "mock/contended/lock_mono", || {
        LockMonoUlid36Generator::new(FixedMockTime { millis: 1 }, ThreadRandom)
    });
}

fn benchmark_wall_sequential_basic_mono(c: &mut Criterion) {
    bench_generator(c, "wall/sequential/basic_mono", || {
        BasicMonoUlid36Generator::new(SystemClock, ThreadRandom)
    });
}

fn benchmark_wall_contended_lock_mono(c: &mut Criterion) {
    bench_generator_contended(c, "wall/contended/lock_mono", || {
        LockMonoUlid36Generator::new(SystemClock, ThreadRandom)
    });
}

fn benchmark_thread_local(c: &mut Criterion) {
    let mut group = c.benchmark_group("thread_local");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("ulid36_mono/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(ulid36::ulid36_mono().unwrap());
            }
        });
    });
    group.finish();
}

fn benchmark_codec(c: &mut Criterion) {
    let id: Ulid36 = "0oqwxwgm0k3j9x0b2c7d8e1fz".parse().unwrap();
    let suffix = id.random_part().to_owned();

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(1));
    group.bench_function("parse", |b| {
        b.iter(|| black_box(black_box(id.as_str()).parse::<Ulid36>().unwrap()));
    });
    group.bench_function("decode_time", |b| {
        b.iter(|| black_box(decode_time(black_box(id.as_str())).unwrap()));
    });
    group.bench_function("increment", |b| {
        b.iter(|| black_box(increment(black_box(&suffix)).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    // Mock clock
    benchmark_mock_sequential_basic,
    benchmark_mock_sequential_basic_mono,
    benchmark_mock_sequential_lock_mono,
    benchmark_mock_contended_lock_mono,
    // Wall clock
    benchmark_wall_sequential_basic_mono,
    benchmark_wall_contended_lock_mono,
    benchmark_thread_local,
    // Codec
    benchmark_codec,
);

criterion_main!(benches);
