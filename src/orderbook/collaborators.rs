//! Interfaces to the services the view depends on.
//!
//! They are injected into the controller at construction. All methods are
//! called from the owning context only; implementations that share state with
//! other threads handle their own synchronisation.

use super::entry::OrderEntry;
use super::selection::PreferredOrder;
use super::volume::{LegBound, MinVolInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the user currently buys or sells the base coin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketMode {
    /// Buying the base coin
    Buy,
    /// Selling the base coin
    Sell,
}

impl fmt::Display for MarketMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketMode::Buy => write!(f, "BUY"),
            MarketMode::Sell => write!(f, "SELL"),
        }
    }
}

/// Background engine computing best-order suggestions across books
pub trait AggregationService: Send + Sync {
    /// `true` while a computation is running
    fn is_busy(&self) -> bool;

    /// The latest computed suggestions; empty means "no suggestions"
    fn data(&self) -> Vec<OrderEntry>;

    /// Request a recomputation. Fire and forget: results are pulled later via
    /// [`AggregationService::data`].
    fn process_best_orders(&self);
}

/// The trading page state: active pair, market mode and order form values
pub trait TradingPair: Send + Sync {
    /// Switch one leg of the active pair. Returns `false` when the coin cannot
    /// be set on that leg.
    fn set_pair(&self, is_base_leg: bool, coin: &str) -> bool;

    /// Current market mode
    fn market_mode(&self) -> MarketMode;

    /// Volume currently entered by the user, as decimal text
    fn volume(&self) -> String;

    /// Price currently in effect, as decimal text
    fn price(&self) -> String;

    /// Hand over an order the user picked from the best-orders set
    fn set_preferred_order(&self, order: PreferredOrder);
}

/// Source of per-leg trading limits for the active pair
pub trait PricingProvider: Send + Sync {
    /// Maximum taker volume for the (base, rel) legs
    fn taker_vol(&self) -> (LegBound, LegBound);

    /// Minimum trading volume for the (base, rel) legs
    fn min_vol(&self) -> (MinVolInfo, MinVolInfo);
}
