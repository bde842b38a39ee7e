//! Reconciliation of the three collections against snapshots and suggestions

use super::collaborators::{AggregationService, PricingProvider, TradingPair};
use super::collection::{BookKind, OrderBookCollection};
use super::error::OrderBookError;
use super::events::{ChangeEvent, Notifier};
use super::selection::{BestOrderSelector, SelectionState};
use super::sequence::{SequenceGuard, SnapshotOutcome};
use super::snapshot::OrderBookSnapshot;
use super::volume::{LegBound, VolumeBounds, VolumeBoundsCalculator};
use crate::config::ReconcilerConfig;
use crossbeam::channel::Receiver;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Owns the asks, bids and best-orders collections of one view, the pending
/// best-order selection and the taker volume bounds.
///
/// Every method must be called from the single context that owns the
/// controller; see [`crate::orderbook::spawn_reconciler`] for a ready-made one.
pub struct OrderBookController {
    asks: OrderBookCollection,
    bids: OrderBookCollection,
    best_orders: OrderBookCollection,
    selector: BestOrderSelector,
    volume: VolumeBoundsCalculator,
    sequence: SequenceGuard,
    notifier: Notifier,
    config: ReconcilerConfig,

    aggregation: Arc<dyn AggregationService>,
    trading_pair: Arc<dyn TradingPair>,
    pricing: Arc<dyn PricingProvider>,
}

impl OrderBookController {
    /// Create a controller with default configuration
    pub fn new(
        aggregation: Arc<dyn AggregationService>,
        trading_pair: Arc<dyn TradingPair>,
        pricing: Arc<dyn PricingProvider>,
    ) -> Self {
        Self::with_config(aggregation, trading_pair, pricing, ReconcilerConfig::default())
    }

    /// Create a controller with explicit configuration
    pub fn with_config(
        aggregation: Arc<dyn AggregationService>,
        trading_pair: Arc<dyn TradingPair>,
        pricing: Arc<dyn PricingProvider>,
        config: ReconcilerConfig,
    ) -> Self {
        Self {
            asks: OrderBookCollection::new(BookKind::Asks),
            bids: OrderBookCollection::new(BookKind::Bids),
            best_orders: OrderBookCollection::new(BookKind::BestOrders),
            selector: BestOrderSelector::new(),
            volume: VolumeBoundsCalculator::new(),
            sequence: SequenceGuard::new(),
            notifier: Notifier::new(),
            config,
            aggregation,
            trading_pair,
            pricing,
        }
    }

    /// Receive every change event published from now on
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        self.notifier.subscribe()
    }

    /// Active configuration
    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Sell side rows
    pub fn asks(&self) -> &OrderBookCollection {
        &self.asks
    }

    /// Buy side rows
    pub fn bids(&self) -> &OrderBookCollection {
        &self.bids
    }

    /// Best-order suggestions
    pub fn best_orders(&self) -> &OrderBookCollection {
        &self.best_orders
    }

    /// Pending best-order selection
    pub fn pending_selection(&self) -> &SelectionState {
        self.selector.state()
    }

    /// Newest snapshot sequence applied
    pub fn last_sequence(&self) -> Option<u64> {
        self.sequence.last_sequence()
    }

    /// `true` while the aggregation service computes suggestions
    pub fn is_best_orders_busy(&self) -> bool {
        self.aggregation.is_busy()
    }

    /// All stored volume bounds
    pub fn volume_bounds(&self) -> &VolumeBounds {
        self.volume.bounds()
    }

    /// Maximum taker volume on the base leg
    pub fn base_max_taker_vol(&self) -> &LegBound {
        self.volume.base_max_taker_vol()
    }

    /// Maximum taker volume on the rel leg
    pub fn rel_max_taker_vol(&self) -> &LegBound {
        self.volume.rel_max_taker_vol()
    }

    /// Minimum taker volume on the base leg, `"0"` when unset
    pub fn base_min_taker_vol(&self) -> &str {
        self.volume.base_min_taker_vol()
    }

    /// Minimum taker volume on the rel leg, `"0"` when unset
    pub fn rel_min_taker_vol(&self) -> &str {
        self.volume.rel_min_taker_vol()
    }

    /// Minimum amount to trade at the current price and market mode
    pub fn current_min_taker_vol(&self) -> String {
        self.volume
            .current_min_taker_vol(self.trading_pair.market_mode(), &self.trading_pair.price())
    }

    /// Steady-state update: diff asks and bids against `snapshot`, then bring
    /// the best orders in line with the aggregation service.
    pub fn refresh_orderbook(&mut self, snapshot: OrderBookSnapshot) -> SnapshotOutcome {
        if self.config.enforce_sequence && !self.sequence.accept_refresh(&snapshot) {
            return SnapshotOutcome::Stale;
        }
        trace!(
            "Refreshing {} #{} ({} orders)",
            snapshot.pair,
            snapshot.sequence,
            snapshot.order_count()
        );

        let changes = self.asks.refresh_orderbook(snapshot.asks);
        self.notifier.publish_rows(BookKind::Asks, changes);
        let changes = self.bids.refresh_orderbook(snapshot.bids);
        self.notifier.publish_rows(BookKind::Bids, changes);

        let data = self.aggregation.data();
        let changes = if data.is_empty() {
            self.best_orders.clear_orderbook()
        } else if self.best_orders.is_empty() {
            self.best_orders.reset_orderbook(data)
        } else {
            self.best_orders.refresh_orderbook(data)
        };
        self.notifier.publish_rows(BookKind::BestOrders, changes);

        self.volume
            .set_both_taker_vol(self.pricing.as_ref(), &mut self.notifier);
        SnapshotOutcome::Applied
    }

    /// Structural update after a pair switch: replace asks and bids, hand any
    /// pending selection to the trading page, then rebuild the best orders.
    pub fn reset_orderbook(&mut self, snapshot: OrderBookSnapshot) -> SnapshotOutcome {
        if self.config.enforce_sequence && !self.sequence.accept_reset(&snapshot) {
            return SnapshotOutcome::Stale;
        }
        debug!(
            "Resetting to {} #{} ({} orders)",
            snapshot.pair,
            snapshot.sequence,
            snapshot.order_count()
        );

        let changes = self.asks.reset_orderbook(snapshot.asks);
        self.notifier.publish_rows(BookKind::Asks, changes);
        let changes = self.bids.reset_orderbook(snapshot.bids);
        self.notifier.publish_rows(BookKind::Bids, changes);
        self.volume
            .set_both_taker_vol(self.pricing.as_ref(), &mut self.notifier);

        // Delivered before the best orders of the previous pair are torn down.
        if let Some(order) = self.selector.take_pending() {
            info!("Selected best order has a value, setting preferred order");
            self.trading_pair.set_preferred_order(order);
        }

        let changes = self.best_orders.clear_orderbook();
        self.notifier.publish_rows(BookKind::BestOrders, changes);
        self.aggregation.process_best_orders();
        SnapshotOutcome::Applied
    }

    /// Tear the view down: clear all three collections and drop the pending
    /// selection. Snapshots produced before the clear stay stale.
    pub fn clear_orderbook(&mut self) {
        debug!("Clearing order book view");
        let changes = self.asks.clear_orderbook();
        self.notifier.publish_rows(BookKind::Asks, changes);
        let changes = self.bids.clear_orderbook();
        self.notifier.publish_rows(BookKind::Bids, changes);
        let changes = self.best_orders.clear_orderbook();
        self.notifier.publish_rows(BookKind::BestOrders, changes);

        self.sequence.clear();
        if self.config.discard_selection_on_clear {
            self.selector.discard();
        }
    }

    /// Reprocess best orders when the entered volume is positive, otherwise
    /// clear them.
    pub fn refresh_best_orders(&mut self) {
        let changes = self.selector.refresh_best_orders(
            self.trading_pair.as_ref(),
            self.aggregation.as_ref(),
            &mut self.best_orders,
        );
        self.notifier.publish_rows(BookKind::BestOrders, changes);
    }

    /// Select a displayed best order and switch the pair to its coin.
    ///
    /// The selection stays pending until the next [`Self::reset_orderbook`].
    pub fn select_best_order(&mut self, uuid: &str) -> Result<(), OrderBookError> {
        self.selector
            .select_best_order(uuid, &self.best_orders, self.trading_pair.as_ref())
    }
}
