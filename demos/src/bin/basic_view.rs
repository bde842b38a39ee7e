// demos/src/bin/basic_view.rs

mod helpers;

use crossbeam::channel::Receiver;
use dex_orderbook::{
    ChangeEvent, MarketMode, OrderBookController, OrderBookSnapshot, PairId, setup_logger,
};
use helpers::{FixedPricing, LoggingPage, StaticAggregation, order};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

fn main() {
    setup_logger();
    info!("Basic order book view example");

    let aggregation = Arc::new(StaticAggregation::default());
    if let Ok(mut orders) = aggregation.orders.lock() {
        *orders = vec![
            order(900, "BTC", "0.00041", "3").with_rel_coin("KMD"),
            order(901, "LTC", "0.0062", "40").with_rel_coin("KMD"),
        ];
    }

    let mut controller = OrderBookController::new(
        aggregation,
        Arc::new(LoggingPage {
            mode: MarketMode::Sell,
            volume: "25".to_string(),
            price: "0.00041".to_string(),
        }),
        Arc::new(FixedPricing),
    );
    let events = controller.subscribe();
    let pair = PairId::new("KMD", "BTC");

    // First snapshot of the pair
    controller.reset_orderbook(OrderBookSnapshot::new(
        pair.clone(),
        1,
        vec![order(1, "KMD", "0.00042", "100"), order(2, "KMD", "0.00043", "60")],
        vec![order(3, "KMD", "0.00040", "80")],
    ));
    drain("reset", &events);

    // One ask filled, one new ask, the bid resized
    controller.refresh_orderbook(OrderBookSnapshot::new(
        pair.clone(),
        2,
        vec![order(2, "KMD", "0.00043", "60"), order(4, "KMD", "0.00044", "15")],
        vec![order(3, "KMD", "0.00040", "70")],
    ));
    drain("refresh", &events);

    // Out of order delivery is ignored
    let outcome = controller.refresh_orderbook(OrderBookSnapshot::new(pair, 1, Vec::new(), Vec::new()));
    info!("Late snapshot: {:?}", outcome);

    info!(
        "Current minimum taker volume: {}",
        controller.current_min_taker_vol()
    );

    // Pick a suggestion, then the pair switch arrives as a reset
    match controller.select_best_order(&Uuid::from_u128(900).to_string()) {
        Ok(()) => info!("Selection pending: {:?}", controller.pending_selection()),
        Err(err) => info!("Selection failed: {}", err),
    }
    controller.reset_orderbook(OrderBookSnapshot::new(
        PairId::new("KMD", "LTC"),
        3,
        Vec::new(),
        Vec::new(),
    ));
    drain("pair switch", &events);

    controller.clear_orderbook();
    drain("clear", &events);
}

fn drain(step: &str, events: &Receiver<ChangeEvent>) {
    for event in events.try_iter() {
        match event {
            ChangeEvent::Rows { kind, change } => info!("[{}] {}: {:?}", step, kind, change),
            other => info!("[{}] {:?}", step, other),
        }
    }
}
