//! Recency filtering for incoming snapshots

use super::snapshot::{OrderBookSnapshot, PairId};
use tracing::debug;

/// Result of offering a snapshot to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// The snapshot was applied
    Applied,
    /// The snapshot was older than the applied state, or belongs to a pair
    /// that is no longer displayed, and was ignored
    Stale,
}

/// Remembers which pair is displayed and the newest sequence applied.
///
/// There is a single sequence floor for all pairs, so the transport counter
/// must not restart on a pair switch. The floor survives a clear so that
/// snapshots produced before the clear stay rejected.
#[derive(Debug, Clone, Default)]
pub struct SequenceGuard {
    identity: Option<PairId>,
    last_sequence: Option<u64>,
}

impl SequenceGuard {
    /// Create a guard that accepts anything
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair currently displayed, if any
    pub fn identity(&self) -> Option<&PairId> {
        self.identity.as_ref()
    }

    /// Newest sequence applied so far
    pub fn last_sequence(&self) -> Option<u64> {
        self.last_sequence
    }

    fn is_newer(&self, sequence: u64) -> bool {
        self.last_sequence.is_none_or(|last| sequence > last)
    }

    /// Accept a refresh snapshot: it must be newer and, once a pair is
    /// displayed, belong to that pair.
    pub fn accept_refresh(&mut self, snapshot: &OrderBookSnapshot) -> bool {
        if !self.is_newer(snapshot.sequence) {
            debug!(
                "Ignoring refresh #{} for {}: last applied #{:?}",
                snapshot.sequence, snapshot.pair, self.last_sequence
            );
            return false;
        }
        match &self.identity {
            Some(pair) if *pair != snapshot.pair => {
                debug!(
                    "Ignoring refresh #{} for {}: displaying {}",
                    snapshot.sequence, snapshot.pair, pair
                );
                false
            }
            _ => {
                self.identity = Some(snapshot.pair.clone());
                self.last_sequence = Some(snapshot.sequence);
                true
            }
        }
    }

    /// Accept a reset snapshot: it must be newer; its pair becomes the
    /// displayed one.
    pub fn accept_reset(&mut self, snapshot: &OrderBookSnapshot) -> bool {
        if !self.is_newer(snapshot.sequence) {
            debug!(
                "Ignoring reset #{} for {}: last applied #{:?}",
                snapshot.sequence, snapshot.pair, self.last_sequence
            );
            return false;
        }
        self.identity = Some(snapshot.pair.clone());
        self.last_sequence = Some(snapshot.sequence);
        true
    }

    /// Forget the displayed pair; the sequence floor is kept
    pub fn clear(&mut self) {
        self.identity = None;
    }
}
