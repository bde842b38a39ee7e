//! Ordered, uuid-keyed collection of order entries

use super::entry::{EntryField, OrderEntry};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;
use uuid::Uuid;

/// Which of the three collections of a view a change belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookKind {
    /// Sell side of the current pair
    Asks,
    /// Buy side of the current pair
    Bids,
    /// Aggregated best-order suggestions
    BestOrders,
}

impl fmt::Display for BookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookKind::Asks => write!(f, "ASKS"),
            BookKind::Bids => write!(f, "BIDS"),
            BookKind::BestOrders => write!(f, "BEST_ORDERS"),
        }
    }
}

/// A single row-level change applied to a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowChange {
    /// All previous rows were dropped and `len` new rows added
    Reset {
        /// Number of rows after the reset
        len: usize,
    },
    /// All rows were dropped
    Cleared,
    /// A new row was inserted at `index`
    Inserted {
        /// Position of the new row
        index: usize,
        /// Key of the new row
        uuid: Uuid,
    },
    /// The row previously at `index` was removed
    Removed {
        /// Position the row occupied before removal
        index: usize,
        /// Key of the removed row
        uuid: Uuid,
    },
    /// An existing row moved from `from` to `to`
    Moved {
        /// Position before the move
        from: usize,
        /// Position after the move
        to: usize,
        /// Key of the moved row
        uuid: Uuid,
    },
    /// The row at `index` was replaced by a newer entry with the same uuid
    Updated {
        /// Position of the row
        index: usize,
        /// Key of the row
        uuid: Uuid,
        /// Fields whose value changed
        fields: Vec<EntryField>,
    },
}

impl RowChange {
    /// `true` for changes that invalidate every row position
    pub fn is_structural(&self) -> bool {
        matches!(self, RowChange::Reset { .. } | RowChange::Cleared)
    }
}

/// Deduplicate by uuid: the first occurrence fixes the position, the last one
/// supplies the value.
fn index_entries(entries: Vec<OrderEntry>) -> IndexMap<Uuid, OrderEntry> {
    let mut indexed = IndexMap::with_capacity(entries.len());
    for entry in entries {
        indexed.insert(entry.uuid, entry);
    }
    indexed
}

/// Mark the inputs that lie on a longest strictly increasing run of current
/// positions. `None` (rows not yet present) never counts.
fn stable_rows(positions: &[Option<usize>]) -> Vec<bool> {
    // (position, input index) of the smallest tail of each run length
    let mut tails: Vec<(usize, usize)> = Vec::new();
    let mut links: Vec<Option<usize>> = vec![None; positions.len()];

    for (input, position) in positions.iter().enumerate() {
        let Some(position) = *position else { continue };
        let length = tails.partition_point(|&(tail, _)| tail < position);
        links[input] = length.checked_sub(1).map(|prev| tails[prev].1);
        if length == tails.len() {
            tails.push((position, input));
        } else {
            tails[length] = (position, input);
        }
    }

    let mut stable = vec![false; positions.len()];
    let mut cursor = tails.last().map(|&(_, input)| input);
    while let Some(input) = cursor {
        stable[input] = true;
        cursor = links[input];
    }
    stable
}

/// One side of the view (asks, bids or best orders).
///
/// Rows are kept in the order of the last input set and keyed by uuid, so a
/// uuid appears at most once.
#[derive(Debug, Clone)]
pub struct OrderBookCollection {
    kind: BookKind,
    rows: IndexMap<Uuid, OrderEntry>,
}

impl OrderBookCollection {
    /// Create an empty collection
    pub fn new(kind: BookKind) -> Self {
        Self {
            kind,
            rows: IndexMap::new(),
        }
    }

    /// Which collection this is
    pub fn kind(&self) -> BookKind {
        self.kind
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the collection holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by uuid
    pub fn get(&self, uuid: &Uuid) -> Option<&OrderEntry> {
        self.rows.get(uuid)
    }

    /// Position of a row by uuid
    pub fn position(&self, uuid: &Uuid) -> Option<usize> {
        self.rows.get_index_of(uuid)
    }

    /// Row at a position
    pub fn get_index(&self, index: usize) -> Option<&OrderEntry> {
        self.rows.get_index(index).map(|(_, entry)| entry)
    }

    /// Iterate over the rows in display order
    pub fn iter(&self) -> impl Iterator<Item = &OrderEntry> {
        self.rows.values()
    }

    /// Copy of the rows in display order
    pub fn entries(&self) -> Vec<OrderEntry> {
        self.rows.values().cloned().collect()
    }

    /// Replace the whole collection.
    ///
    /// Reported as a single structural change regardless of overlap with the
    /// previous contents.
    pub fn reset_orderbook(&mut self, entries: Vec<OrderEntry>) -> Vec<RowChange> {
        self.rows = index_entries(entries);
        trace!("{}: reset with {} rows", self.kind, self.rows.len());
        vec![RowChange::Reset {
            len: self.rows.len(),
        }]
    }

    /// Apply only the difference between the current rows and `entries`.
    ///
    /// Rows present on both sides with identical fields produce no change, and
    /// only the fewest rows needed to restore the input order are reported as
    /// moved. Afterwards the rows equal `entries` (deduplicated) in input order.
    pub fn refresh_orderbook(&mut self, entries: Vec<OrderEntry>) -> Vec<RowChange> {
        let incoming = index_entries(entries);
        let mut changes = Vec::new();

        // Walk backwards so reported indices stay valid for the consumer.
        for index in (0..self.rows.len()).rev() {
            let stale = self
                .rows
                .get_index(index)
                .map(|(uuid, _)| *uuid)
                .filter(|uuid| !incoming.contains_key(uuid));
            if let Some(uuid) = stale {
                self.rows.shift_remove_index(index);
                trace!("{}: removed {} at {}", self.kind, uuid, index);
                changes.push(RowChange::Removed { index, uuid });
            }
        }

        // Surviving rows on a longest increasing run of current positions keep
        // their place; every other row is moved next to its input predecessor.
        let positions: Vec<Option<usize>> = incoming
            .keys()
            .map(|uuid| self.rows.get_index_of(uuid))
            .collect();
        let stable = stable_rows(&positions);

        let mut previous: Option<Uuid> = None;
        for (target, (uuid, entry)) in incoming.into_iter().enumerate() {
            let slot = previous
                .and_then(|prev| self.rows.get_index_of(&prev))
                .map_or(0, |index| index + 1);

            match self.rows.get_index_of(&uuid) {
                Some(current) => {
                    let mut index = current;
                    if !stable[target] {
                        let to = if current < slot { slot - 1 } else { slot };
                        if to != current {
                            self.rows.move_index(current, to);
                            trace!("{}: moved {} {} -> {}", self.kind, uuid, current, to);
                            changes.push(RowChange::Moved {
                                from: current,
                                to,
                                uuid,
                            });
                        }
                        index = to;
                    }
                    if let Some(existing) = self.rows.get_mut(&uuid) {
                        let fields = existing.changed_fields(&entry);
                        if !fields.is_empty() {
                            *existing = entry;
                            trace!("{}: updated {} at {} {:?}", self.kind, uuid, index, fields);
                            changes.push(RowChange::Updated {
                                index,
                                uuid,
                                fields,
                            });
                        }
                    }
                }
                None => {
                    self.rows.shift_insert(slot, uuid, entry);
                    trace!("{}: inserted {} at {}", self.kind, uuid, slot);
                    changes.push(RowChange::Inserted { index: slot, uuid });
                }
            }
            previous = Some(uuid);
        }

        changes
    }

    /// Drop every row; always reported as a structural change
    pub fn clear_orderbook(&mut self) -> Vec<RowChange> {
        self.rows.clear();
        trace!("{}: cleared", self.kind);
        vec![RowChange::Cleared]
    }
}
