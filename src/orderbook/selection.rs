//! The user's pick from the best-orders set and its lifecycle

use super::collaborators::{AggregationService, MarketMode, TradingPair};
use super::collection::{OrderBookCollection, RowChange};
use super::entry::OrderEntry;
use super::error::OrderBookError;
use crate::utils::is_positive;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use uuid::Uuid;

/// Trade intent built from a best order, handed to the trading page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredOrder {
    /// The coin the trading page switches to
    pub coin: String,
    /// Price as decimal text
    pub price: String,
    /// Quantity (the order's maximum volume) as decimal text
    pub quantity: String,
    /// Price fraction denominator
    pub price_denom: String,
    /// Price fraction numerator
    pub price_numer: String,
    /// Quantity fraction denominator
    pub quantity_denom: String,
    /// Quantity fraction numerator
    pub quantity_numer: String,
}

impl PreferredOrder {
    /// Build the intent for `entry` under the given market mode.
    ///
    /// The target coin is the one opposite to what the user specifies: the rel
    /// coin when buying, the order's coin when selling.
    pub fn from_entry(entry: &OrderEntry, mode: MarketMode) -> Result<Self, OrderBookError> {
        let coin = match mode {
            MarketMode::Buy => entry
                .rel_coin
                .clone()
                .ok_or(OrderBookError::MissingRelCoin { uuid: entry.uuid })?,
            MarketMode::Sell => entry.coin.clone(),
        };

        Ok(Self {
            coin,
            price: entry.price.clone(),
            quantity: entry.max_volume.clone(),
            price_denom: entry.price_fraction.denom.clone(),
            price_numer: entry.price_fraction.numer.clone(),
            quantity_denom: entry.max_volume_fraction.denom.clone(),
            quantity_numer: entry.max_volume_fraction.numer.clone(),
        })
    }
}

/// At most one selection waits for the next structural reset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing selected
    #[default]
    Empty,
    /// A selection waiting to be delivered
    Pending(PreferredOrder),
}

impl SelectionState {
    /// `true` when a selection is waiting
    pub fn is_pending(&self) -> bool {
        matches!(self, SelectionState::Pending(_))
    }
}

/// Tracks the pending best-order selection until it is consumed or discarded
#[derive(Debug, Clone, Default)]
pub struct BestOrderSelector {
    state: SelectionState,
}

impl BestOrderSelector {
    /// Create a selector with nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection state
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Select the best order keyed by `uuid` and switch the pair to its coin.
    ///
    /// On success the selection stays pending until [`Self::take_pending`].
    /// If the trading page refuses the coin the selection is discarded.
    /// An unknown uuid leaves the state untouched.
    pub fn select_best_order(
        &mut self,
        uuid: &str,
        best_orders: &OrderBookCollection,
        pair: &dyn TradingPair,
    ) -> Result<(), OrderBookError> {
        let entry = Uuid::parse_str(uuid)
            .ok()
            .and_then(|key| best_orders.get(&key))
            .ok_or_else(|| OrderBookError::OrderNotFound(uuid.to_string()))?;

        let mode = pair.market_mode();
        let order = match PreferredOrder::from_entry(entry, mode) {
            Ok(order) => order,
            Err(err) => {
                error!("Cannot select best order {}: {}", uuid, err);
                self.state = SelectionState::Empty;
                return Err(err);
            }
        };

        let coin = order.coin.clone();
        self.state = SelectionState::Pending(order);

        if !pair.set_pair(false, &coin) {
            error!("Was not able to set rel coin in the orderbook to: {}", coin);
            self.state = SelectionState::Empty;
            return Err(OrderBookError::PairSwitchRejected { coin });
        }

        debug!("Best order {} selected ({}), switching to {}", uuid, mode, coin);
        Ok(())
    }

    /// Remove and return the pending selection, leaving the state empty
    pub fn take_pending(&mut self) -> Option<PreferredOrder> {
        match std::mem::take(&mut self.state) {
            SelectionState::Pending(order) => {
                info!("Pending best order for {} consumed", order.coin);
                Some(order)
            }
            SelectionState::Empty => None,
        }
    }

    /// Drop any pending selection. Returns `true` if one was dropped.
    pub fn discard(&mut self) -> bool {
        let dropped = self.state.is_pending();
        self.state = SelectionState::Empty;
        if dropped {
            debug!("Pending best order discarded");
        }
        dropped
    }

    /// Ask the aggregation service for fresh suggestions, unless the entered
    /// volume is not positive, in which case the suggestions are cleared.
    pub fn refresh_best_orders(
        &self,
        pair: &dyn TradingPair,
        aggregation: &dyn AggregationService,
        best_orders: &mut OrderBookCollection,
    ) -> Vec<RowChange> {
        let volume = pair.volume();
        if is_positive(&volume) {
            debug!("Reprocessing best orders for volume {}", volume);
            aggregation.process_best_orders();
            Vec::new()
        } else {
            debug!("Volume {:?} is not positive, clearing best orders", volume);
            best_orders.clear_orderbook()
        }
    }
}
