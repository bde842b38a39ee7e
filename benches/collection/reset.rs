use super::side;
use criterion::{BenchmarkId, Criterion};
use dex_orderbook::orderbook::{BookKind, OrderBookCollection};
use std::hint::black_box;

pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Collection - Reset");

    for size in [10u128, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("reset", size), size, |b, &size| {
            let mut collection = OrderBookCollection::new(BookKind::Asks);
            b.iter(|| black_box(collection.reset_orderbook(side(0, size))))
        });
    }

    // Input where every key appears twice
    group.bench_function("reset_with_duplicates_500", |b| {
        let mut collection = OrderBookCollection::new(BookKind::Asks);
        b.iter(|| {
            let mut entries = side(0, 250);
            entries.extend(side(0, 250));
            black_box(collection.reset_orderbook(entries))
        })
    });

    group.finish();
}
