//! Cache benchmarks: payload codec and client overhead.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench --package cachet-cache --features test-util
//! cargo bench --package cachet-cache --features test-util -- codec
//! ```
//!
//! The client benchmarks run against the in-memory store, so they measure
//! the layer's own cost (encode, decode, dispatch) without network I/O.

use cachet_cache::{CacheClient, JsonCodec, MemoryStore, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;
use std::time::Duration;

fn record_of(len: usize) -> Record {
    Record::new("x".repeat(len))
}

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for size in [16usize, 1024, 64 * 1024] {
        let record = record_of(size);
        let payload = JsonCodec::encode(&record).expect("encode");
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &record, |b, record| {
            b.iter(|| JsonCodec::encode(black_box(record)));
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &payload, |b, payload| {
            b.iter(|| JsonCodec::decode::<Record>(black_box(payload)));
        });
    }

    group.finish();
}

fn benchmark_client(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let cache = CacheClient::new(Arc::new(MemoryStore::new()));
    let record = record_of(256);

    rt.block_on(cache.set("bench:hit", Duration::ZERO, &record))
        .expect("seed");

    let mut group = c.benchmark_group("client");

    group.bench_function("set", |b| {
        b.to_async(&rt)
            .iter(|| cache.set("bench:set", Duration::from_secs(60), black_box(&record)));
    });

    group.bench_function("get_hit", |b| {
        b.to_async(&rt).iter(|| cache.get::<Record>("bench:hit"));
    });

    group.bench_function("get_miss", |b| {
        b.to_async(&rt).iter(|| cache.get::<Record>("bench:miss"));
    });

    group.finish();
}

criterion_group!(
    name = codec_benches;
    config = Criterion::default()
        .sample_size(200)
        .measurement_time(Duration::from_secs(5));
    targets = benchmark_codec
);

criterion_group!(
    name = client_benches;
    config = Criterion::default().sample_size(200);
    targets = benchmark_client
);

criterion_main!(codec_benches, client_benches);
