//! Shared collaborators for the integration tests

use dex_orderbook::orderbook::{Fraction, LegBound, MinVolInfo, OrderEntry, PreferredOrder};
use dex_orderbook::{AggregationService, MarketMode, PricingProvider, TradingPair};
use std::sync::Mutex;
use uuid::Uuid;

pub fn order(n: u128, coin: &str, rel_coin: Option<&str>, price: &str, volume: &str) -> OrderEntry {
    let mut entry = OrderEntry::new(
        Uuid::from_u128(n),
        coin,
        price,
        Fraction::new(price, "1"),
        volume,
        Fraction::new(volume, "1"),
    );
    entry.rel_coin = rel_coin.map(str::to_string);
    entry
}

#[derive(Default)]
pub struct Aggregation {
    pub data: Mutex<Vec<OrderEntry>>,
    pub processed: Mutex<usize>,
}

impl AggregationService for Aggregation {
    fn is_busy(&self) -> bool {
        false
    }

    fn data(&self) -> Vec<OrderEntry> {
        self.data.lock().unwrap().clone()
    }

    fn process_best_orders(&self) {
        *self.processed.lock().unwrap() += 1;
    }
}

pub struct Page {
    pub mode: Mutex<MarketMode>,
    pub volume: Mutex<String>,
    pub price: Mutex<String>,
    pub accepts: Mutex<bool>,
    pub rel_coin: Mutex<Option<String>>,
    pub preferred: Mutex<Vec<PreferredOrder>>,
}

impl Page {
    pub fn new(mode: MarketMode) -> Self {
        Self {
            mode: Mutex::new(mode),
            volume: Mutex::new("1".to_string()),
            price: Mutex::new("1".to_string()),
            accepts: Mutex::new(true),
            rel_coin: Mutex::new(None),
            preferred: Mutex::new(Vec::new()),
        }
    }
}

impl TradingPair for Page {
    fn set_pair(&self, is_base_leg: bool, coin: &str) -> bool {
        assert!(!is_base_leg, "best orders always switch the rel leg");
        if *self.accepts.lock().unwrap() {
            *self.rel_coin.lock().unwrap() = Some(coin.to_string());
            true
        } else {
            false
        }
    }

    fn market_mode(&self) -> MarketMode {
        *self.mode.lock().unwrap()
    }

    fn volume(&self) -> String {
        self.volume.lock().unwrap().clone()
    }

    fn price(&self) -> String {
        self.price.lock().unwrap().clone()
    }

    fn set_preferred_order(&self, order: PreferredOrder) {
        self.preferred.lock().unwrap().push(order);
    }
}

pub struct Pricing {
    pub min: Mutex<(String, String)>,
}

impl Pricing {
    pub fn new(base_min: &str, rel_min: &str) -> Self {
        Self {
            min: Mutex::new((base_min.to_string(), rel_min.to_string())),
        }
    }
}

impl PricingProvider for Pricing {
    fn taker_vol(&self) -> (LegBound, LegBound) {
        (LegBound::new("1", "100", "100"), LegBound::new("1", "2", "2"))
    }

    fn min_vol(&self) -> (MinVolInfo, MinVolInfo) {
        let (base, rel) = self.min.lock().unwrap().clone();
        (MinVolInfo::new(base), MinVolInfo::new(rel))
    }
}
