// demos/src/bin/threaded_view.rs

mod helpers;

use dex_orderbook::orderbook::spawn_reconciler;
use dex_orderbook::{
    MarketMode, OrderBookController, OrderBookSnapshot, PairId, ReconcilerConfig, setup_logger,
};
use helpers::{FixedPricing, LoggingPage, StaticAggregation, order};
use std::sync::Arc;
use std::thread;
use tracing::{error, info};

fn main() {
    setup_logger();
    info!("Threaded order book view example");

    let config = match ReconcilerConfig::from_json(r#"{"command_capacity": 16}"#) {
        Ok(config) => config,
        Err(err) => {
            error!("Bad configuration: {}", err);
            return;
        }
    };

    let mut controller = OrderBookController::with_config(
        Arc::new(StaticAggregation::default()),
        Arc::new(LoggingPage {
            mode: MarketMode::Buy,
            volume: "0".to_string(),
            price: "0.00041".to_string(),
        }),
        Arc::new(FixedPricing),
        config,
    );
    let events = controller.subscribe();

    let handle = match spawn_reconciler(controller) {
        Ok(handle) => handle,
        Err(err) => {
            error!("Unable to start reconciler: {}", err);
            return;
        }
    };

    // Two producers race; sequence numbers decide what is applied
    let producers: Vec<_> = (0..2u64)
        .map(|producer| {
            let sender = handle.sender();
            thread::spawn(move || {
                for round in 0..5u64 {
                    let sequence = round * 2 + producer + 1;
                    let start = u128::from(sequence);
                    let snapshot = OrderBookSnapshot::new(
                        PairId::new("KMD", "BTC"),
                        sequence,
                        (start..start + 3)
                            .map(|n| order(n, "KMD", "0.00042", "10"))
                            .collect(),
                        Vec::new(),
                    );
                    if sender
                        .send(dex_orderbook::orderbook::ReconcileCommand::Refresh(snapshot))
                        .is_err()
                    {
                        break;
                    }
                }
            })
        })
        .collect();

    for producer in producers {
        let _ = producer.join();
    }

    // Volume "0" makes this a clear of the best orders
    let _ = handle.refresh_best_orders();

    match handle.inspect(|controller| (controller.last_sequence(), controller.asks().len())) {
        Ok((sequence, asks)) => info!("Applied up to {:?}, {} asks displayed", sequence, asks),
        Err(err) => error!("Inspect failed: {}", err),
    }

    match handle.join() {
        Ok(controller) => info!(
            "Reconciler stopped with {} asks and {} events queued",
            controller.asks().len(),
            events.len()
        ),
        Err(err) => error!("Reconciler failed: {}", err),
    }
}
