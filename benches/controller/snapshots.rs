use crate::collection::side;
use criterion::{BenchmarkId, Criterion};
use dex_orderbook::orderbook::{LegBound, MinVolInfo, OrderEntry, PreferredOrder};
use dex_orderbook::{
    AggregationService, MarketMode, OrderBookController, OrderBookSnapshot, PairId,
    PricingProvider, TradingPair,
};
use std::hint::black_box;
use std::sync::Arc;

struct Suggestions(Vec<OrderEntry>);

impl AggregationService for Suggestions {
    fn is_busy(&self) -> bool {
        false
    }

    fn data(&self) -> Vec<OrderEntry> {
        self.0.clone()
    }

    fn process_best_orders(&self) {}
}

struct Page;

impl TradingPair for Page {
    fn set_pair(&self, _is_base_leg: bool, _coin: &str) -> bool {
        true
    }

    fn market_mode(&self) -> MarketMode {
        MarketMode::Sell
    }

    fn volume(&self) -> String {
        "1".to_string()
    }

    fn price(&self) -> String {
        "0.0004".to_string()
    }

    fn set_preferred_order(&self, _order: PreferredOrder) {}
}

struct Pricing;

impl PricingProvider for Pricing {
    fn taker_vol(&self) -> (LegBound, LegBound) {
        (LegBound::new("1", "250", "250"), LegBound::new("10", "1", "0.1"))
    }

    fn min_vol(&self) -> (MinVolInfo, MinVolInfo) {
        (MinVolInfo::new("0.0001"), MinVolInfo::new("0.00777"))
    }
}

fn controller(best: u128) -> OrderBookController {
    OrderBookController::new(
        Arc::new(Suggestions(side(10_000, best))),
        Arc::new(Page),
        Arc::new(Pricing),
    )
}

fn snapshot(sequence: u64, start: u128, depth: u128) -> OrderBookSnapshot {
    OrderBookSnapshot::new(
        PairId::new("KMD", "BTC"),
        sequence,
        side(start, depth),
        side(start + 5_000, depth),
    )
}

/// Full refresh cycles through the controller, including notifications
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Controller - Snapshots");

    for depth in [50u128, 500].iter() {
        group.bench_with_input(BenchmarkId::new("refresh_cycle", depth), depth, |b, &depth| {
            let mut controller = controller(20);
            let events = controller.subscribe();
            let mut sequence = 0u64;
            b.iter(|| {
                sequence += 1;
                let start = u128::from(sequence % 3);
                black_box(controller.refresh_orderbook(snapshot(sequence, start, depth)));
                events.try_iter().count()
            })
        });
    }

    group.bench_function("reset_then_refresh_100", |b| {
        let mut controller = controller(20);
        let mut sequence = 0u64;
        b.iter(|| {
            sequence += 2;
            controller.reset_orderbook(snapshot(sequence - 1, 0, 100));
            black_box(controller.refresh_orderbook(snapshot(sequence, 1, 100)))
        })
    });

    group.finish();
}
