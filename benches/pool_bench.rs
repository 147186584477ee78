//! Allocation benchmarks for both pools

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use memutil::{MemPool, RawMemPool, SimpleMemPool};

fn slab_pool_benchmark(c: &mut Criterion) {
    let mut pool = SimpleMemPool::new(64 * 1024, 4096).unwrap();

    let mut group = c.benchmark_group("slab_pool");
    group.throughput(Throughput::Elements(1));

    group.bench_function("alloc_512", |b| {
        b.iter(|| {
            let buf = pool.alloc(black_box(512));
            black_box(buf);
        })
    });

    group.bench_function("alloc_refused", |b| {
        b.iter(|| {
            let buf = pool.alloc(black_box(8192));
            black_box(buf);
        })
    });

    group.finish();
}

fn raw_pool_benchmark(c: &mut Criterion) {
    let mut pool = RawMemPool::new(4096).unwrap();

    let mut group = c.benchmark_group("raw_pool");
    group.throughput(Throughput::Elements(1));

    group.bench_function("alloc_512", |b| {
        b.iter(|| {
            let buf = pool.alloc(black_box(512));
            black_box(buf);
        })
    });

    group.finish();
}

criterion_group!(benches, slab_pool_benchmark, raw_pool_benchmark);
criterion_main!(benches);
