//! In-memory collaborators shared by the demo binaries

#![allow(dead_code)]

use dex_orderbook::orderbook::{Fraction, LegBound, MinVolInfo, PreferredOrder};
use dex_orderbook::{AggregationService, MarketMode, OrderEntry, PricingProvider, TradingPair};
use std::sync::Mutex;
use tracing::info;
use uuid::Uuid;

pub fn order(n: u128, coin: &str, price: &str, volume: &str) -> OrderEntry {
    OrderEntry::new(
        Uuid::from_u128(n),
        coin,
        price,
        Fraction::new(price, "1"),
        volume,
        Fraction::new(volume, "1"),
    )
}

/// Best orders computed ahead of time
#[derive(Default)]
pub struct StaticAggregation {
    pub orders: Mutex<Vec<OrderEntry>>,
}

impl AggregationService for StaticAggregation {
    fn is_busy(&self) -> bool {
        false
    }

    fn data(&self) -> Vec<OrderEntry> {
        self.orders.lock().map(|o| o.clone()).unwrap_or_default()
    }

    fn process_best_orders(&self) {
        info!("Aggregation asked to reprocess best orders");
    }
}

/// A trading page that accepts every pair and logs what it is told
pub struct LoggingPage {
    pub mode: MarketMode,
    pub volume: String,
    pub price: String,
}

impl TradingPair for LoggingPage {
    fn set_pair(&self, is_base_leg: bool, coin: &str) -> bool {
        info!("Trading page switches {} leg to {}", if is_base_leg { "base" } else { "rel" }, coin);
        true
    }

    fn market_mode(&self) -> MarketMode {
        self.mode
    }

    fn volume(&self) -> String {
        self.volume.clone()
    }

    fn price(&self) -> String {
        self.price.clone()
    }

    fn set_preferred_order(&self, order: PreferredOrder) {
        info!(
            "Preferred order: {} {} @ {}",
            order.quantity, order.coin, order.price
        );
    }
}

pub struct FixedPricing;

impl PricingProvider for FixedPricing {
    fn taker_vol(&self) -> (LegBound, LegBound) {
        (
            LegBound::new("1", "1200", "1200"),
            LegBound::new("20", "9", "0.45"),
        )
    }

    fn min_vol(&self) -> (MinVolInfo, MinVolInfo) {
        (MinVolInfo::new("0.0001"), MinVolInfo::new("0.00777"))
    }
}

fn main() {}
