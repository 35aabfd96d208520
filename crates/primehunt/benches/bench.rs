use core::hint::black_box;
use core::num::NonZeroUsize;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use primehunt::{
    BufferedCollect, Claim, Delivery, Distribution, DynamicClaim, LocalClock, Search,
    SearchConfig, SearchRange, StaticPartition, WorkSource, WorkerId, is_prime, run_pool,
};
use std::{io, thread::scope, time::Instant};

// Ceiling of every full-run benchmark.
const MAX_NUMBER: u64 = 200_000;

// Integers drained per thread in the work source benchmarks.
const CLAIMS_PER_THREAD: u64 = 65_536;

fn threads() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

/// Benchmarks the primality test alone over a contiguous block.
fn benchmark_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle");
    for base in [1_000u64, 1_000_000, 1_000_000_000] {
        let block = base..base + 4_096;
        group.throughput(Throughput::Elements(block.end - block.start));
        group.bench_function(format!("is_prime/from_{base}"), |b| {
            b.iter(|| block.clone().filter(|&n| is_prime(black_box(n))).count());
        });
    }
    group.finish();
}

/// Benchmarks draining a work source from every core, without testing the
/// claimed values. Isolates distribution overhead from the oracle.
fn bench_source<S>(c: &mut Criterion, group_name: &str, source_factory: impl Fn(SearchRange) -> S)
where
    S: WorkSource,
{
    let threads = threads();
    let total = CLAIMS_PER_THREAD * threads.get() as u64;
    let range = SearchRange::new(2, total + 1).unwrap();

    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(total));

    group.bench_function(format!("elems/{total}/threads/{threads}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let source = source_factory(range);
                scope(|s| {
                    for worker in WorkerId::all(threads) {
                        let source = &source;
                        s.spawn(move || {
                            let mut lane = source.lane(worker);
                            while let Claim::Ready { value } = source.next(&mut lane) {
                                black_box(value);
                            }
                        });
                    }
                });
            }
            start.elapsed()
        });
    });

    group.finish();
}

fn benchmark_source_static(c: &mut Criterion) {
    bench_source(c, "source/static", |range| {
        StaticPartition::new(range, threads())
    });
}

fn benchmark_source_dynamic(c: &mut Criterion) {
    bench_source(c, "source/dynamic", DynamicClaim::new);
}

/// Benchmarks a complete run for every strategy pairing, discarding output.
fn benchmark_search(c: &mut Criterion) {
    let threads = threads();
    let range = SearchRange::up_to(MAX_NUMBER).unwrap();

    let mut group = c.benchmark_group("search");
    group.throughput(Throughput::Elements(range.len()));
    group.sample_size(20);

    for distribution in [Distribution::Static, Distribution::Dynamic] {
        for delivery in [Delivery::Immediate, Delivery::Buffered] {
            let config = SearchConfig::with_range(threads, range)
                .unwrap()
                .distribution(distribution)
                .delivery(delivery);
            let search = Search::new(config);
            group.bench_function(
                format!("{distribution:?}/{delivery:?}/threads/{threads}"),
                |b| {
                    b.iter(|| {
                        let report = search.run(&mut io::sink()).unwrap();
                        black_box(report.primes_found())
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmarks the buffered merge path with a pool of one through the
/// machine's core count.
fn benchmark_pool_scaling(c: &mut Criterion) {
    let range = SearchRange::up_to(MAX_NUMBER).unwrap();
    let mut group = c.benchmark_group("pool/dynamic_buffered");
    group.throughput(Throughput::Elements(range.len()));
    group.sample_size(20);

    let mut counts = vec![1, 2, 4, threads().get()];
    counts.sort_unstable();
    counts.dedup();

    for count in counts {
        let workers = NonZeroUsize::new(count).unwrap();
        group.bench_function(format!("threads/{count}"), |b| {
            b.iter(|| {
                let source = DynamicClaim::new(range);
                let sink = BufferedCollect::new();
                let stats = run_pool(workers, &source, &sink, &LocalClock).unwrap();
                black_box(stats);
                black_box(sink.len().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_oracle,
    benchmark_source_static,
    benchmark_source_dynamic,
    benchmark_search,
    benchmark_pool_scaling,
);
criterion_main!(benches);
