//! # DEX Order Book View
//!
//! Keeps a user-facing view of a decentralized-exchange order book in sync with
//! an external quoting engine. The view has three collections (asks, bids and
//! an aggregated "best orders" suggestion set), a pending best-order selection
//! and a set of taker volume bounds used to limit what the user can enter.
//!
//! ## Key Features
//!
//! - **Minimal diffs**: periodic snapshots are applied as row-level inserts,
//!   removals, moves and per-field updates keyed by order uuid, so unchanged
//!   rows keep their identity and position. Structural changes (pair switch,
//!   teardown) replace or clear a collection in one step.
//!
//! - **Selection lifecycle**: picking a best order switches the trading pair
//!   to its coin and keeps the order pending until the next structural reset
//!   hands it to the trading page. A refused pair switch discards it.
//!
//! - **Volume bounds**: maximum and minimum taker volumes per leg, refreshed
//!   after every reconciliation, with the current minimum threshold computed
//!   in exact decimal arithmetic.
//!
//! - **Discrete notifications**: every row change and every bound assignment
//!   is published as its own [`orderbook::ChangeEvent`] to any number of
//!   channel subscribers.
//!
//! - **Single owner**: all mutations happen on one context. The
//!   [`orderbook::spawn_reconciler`] helper provides a dedicated thread fed by
//!   a bounded queue, and stale snapshots are filtered by sequence number.
//!
//! ## Collaborators
//!
//! The controller never looks services up globally. The aggregation engine,
//! the trading page and the pricing source are injected as trait objects:
//!
//! | Trait | Provides |
//! |-------|----------|
//! | [`AggregationService`] | busy flag, best-order data, reprocessing trigger |
//! | [`TradingPair`] | pair switch, market mode, entered volume and price, preferred order hand-off |
//! | [`PricingProvider`] | per-leg maximum taker volume and minimum trading volume |
//!
//! ## Example
//!
//! ```rust,ignore
//! use dex_orderbook::{OrderBookController, OrderBookSnapshot, PairId};
//!
//! let mut controller = OrderBookController::new(aggregation, trading_pair, pricing);
//! let events = controller.subscribe();
//!
//! controller.reset_orderbook(OrderBookSnapshot::new(PairId::new("KMD", "BTC"), 1, asks, bids));
//! controller.refresh_orderbook(OrderBookSnapshot::new(PairId::new("KMD", "BTC"), 2, asks, bids));
//!
//! for event in events.try_iter() {
//!     println!("{event:?}");
//! }
//! ```

pub mod config;
pub mod orderbook;

mod utils;

pub use config::ReconcilerConfig;
pub use orderbook::{
    AggregationService, ChangeEvent, MarketMode, OrderBookController, OrderBookError,
    OrderBookSnapshot, OrderEntry, PairId, PricingProvider, TradingPair,
};
pub use utils::{current_time_millis, format_decimal, safe_decimal, setup_logger};
