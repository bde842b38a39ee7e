//! Live order book view: asks, bids and best-order suggestions kept in sync
//! with snapshots, plus the user's best-order selection and volume bounds.

pub mod collaborators;
pub mod collection;
pub mod controller;
pub mod entry;
mod error;
pub mod events;
pub mod reconciler;
pub mod selection;
mod sequence;
mod snapshot;
pub mod volume;

pub use collaborators::{AggregationService, MarketMode, PricingProvider, TradingPair};
pub use collection::{BookKind, OrderBookCollection, RowChange};
pub use controller::OrderBookController;
pub use entry::{EntryField, Fraction, OrderEntry};
pub use error::OrderBookError;
pub use events::{ChangeEvent, Notifier};
pub use reconciler::{ReconcileCommand, ReconcilerHandle, spawn_reconciler};
pub use selection::{BestOrderSelector, PreferredOrder, SelectionState};
pub use sequence::{SequenceGuard, SnapshotOutcome};
pub use snapshot::{OrderBookSnapshot, PairId};
pub use volume::{LegBound, MinVolInfo, VolumeBounds, VolumeBoundsCalculator};
