//! Order book snapshot as produced by the transport

use super::entry::OrderEntry;
use crate::utils::current_time_millis;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The trading pair a snapshot belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId {
    /// Base coin ticker
    pub base: String,
    /// Rel coin ticker
    pub rel: String,
}

impl PairId {
    /// Create a pair identifier
    pub fn new(base: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            rel: rel.into(),
        }
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.rel)
    }
}

/// A snapshot of both sides of one pair at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The pair both sides belong to
    pub pair: PairId,

    /// Monotonic counter assigned by the transport.
    ///
    /// One counter spans every pair: it must keep increasing across pair
    /// switches and must not restart when a new pair is requested. A snapshot
    /// whose sequence is not above the last applied one is dropped, whatever
    /// its pair.
    pub sequence: u64,

    /// Timestamp when the snapshot was taken (milliseconds since epoch)
    pub timestamp: u64,

    /// Sell side, best first
    pub asks: Vec<OrderEntry>,

    /// Buy side, best first
    pub bids: Vec<OrderEntry>,
}

impl OrderBookSnapshot {
    /// Create a snapshot stamped with the current time
    pub fn new(pair: PairId, sequence: u64, asks: Vec<OrderEntry>, bids: Vec<OrderEntry>) -> Self {
        Self {
            pair,
            sequence,
            timestamp: current_time_millis(),
            asks,
            bids,
        }
    }

    /// `true` when neither side has a row
    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }

    /// Total rows across both sides
    pub fn order_count(&self) -> usize {
        self.asks.len() + self.bids.len()
    }
}
