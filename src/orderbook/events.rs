//! Discrete change notifications and their fan-out

use super::collection::{BookKind, RowChange};
use crossbeam::channel::{Receiver, Sender, unbounded};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A single observable change of the view. Events are never coalesced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeEvent {
    /// A row-level change in one of the three collections
    Rows {
        /// The collection that changed
        kind: BookKind,
        /// What changed
        change: RowChange,
    },
    /// Base leg maximum taker volume was reassigned
    BaseMaxTakerVol,
    /// Rel leg maximum taker volume was reassigned
    RelMaxTakerVol,
    /// Base leg minimum taker volume was reassigned
    BaseMinTakerVol,
    /// Rel leg minimum taker volume was reassigned
    RelMinTakerVol,
    /// The derived minimum threshold may have changed
    CurrentMinTakerVol,
}

impl ChangeEvent {
    /// The collection this event concerns, if any
    pub fn book_kind(&self) -> Option<BookKind> {
        match self {
            ChangeEvent::Rows { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Fans events out to every live subscriber, in publication order.
#[derive(Debug, Default)]
pub struct Notifier {
    subscribers: Vec<Sender<ChangeEvent>>,
}

impl Notifier {
    /// Create a notifier without subscribers
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a new subscriber. It receives every event published from now on.
    ///
    /// The channel is unbounded and events are never coalesced or dropped for
    /// a live receiver, so a subscriber must keep draining it; an abandoned
    /// receiver has to be dropped to stop its queue from growing.
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver one event. Subscribers whose receiver was dropped are pruned.
    pub fn publish(&mut self, event: ChangeEvent) {
        trace!("publish {:?}", event);
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    /// Publish the row changes of one collection operation, in order
    pub fn publish_rows(&mut self, kind: BookKind, changes: Vec<RowChange>) {
        for change in changes {
            self.publish(ChangeEvent::Rows { kind, change });
        }
    }
}
