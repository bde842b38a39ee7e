use super::side;
use criterion::{BenchmarkId, Criterion};
use dex_orderbook::orderbook::{BookKind, OrderBookCollection};
use std::hint::black_box;

/// Diffing a collection against a new input set
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Collection - Refresh");

    // Nothing changed, only comparisons
    group.bench_function("identical_500", |b| {
        let mut collection = OrderBookCollection::new(BookKind::Asks);
        collection.reset_orderbook(side(0, 500));
        b.iter(|| black_box(collection.refresh_orderbook(side(0, 500))))
    });

    // A sliding window: one row drops off the front, one joins the back
    for size in [10u128, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("sliding_window", size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut collection = OrderBookCollection::new(BookKind::Asks);
                    collection.reset_orderbook(side(0, size));
                    (collection, side(1, size))
                },
                |(mut collection, next)| black_box(collection.refresh_orderbook(next)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    // Full reversal moves every row
    group.bench_function("reversed_200", |b| {
        b.iter_batched(
            || {
                let mut collection = OrderBookCollection::new(BookKind::Bids);
                collection.reset_orderbook(side(0, 200));
                let mut next = side(0, 200);
                next.reverse();
                (collection, next)
            },
            |(mut collection, next)| black_box(collection.refresh_orderbook(next)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}
