//! Open list: an ordered multimap from priority keys to cells, paired
//! with a reverse index so any cell can be located, rekeyed or removed
//! in logarithmic time.

use std::collections::{BTreeMap, HashMap};

use crate::core::GridCoord;

use super::types::Key;

/// Queue slot: priority key plus an insertion sequence number.
///
/// The sequence keeps entries whose keys fully tie distinct inside the
/// ordered map; relative order between full ties carries no meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    key: Key,
    seq: u64,
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key).then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue over open cells.
///
/// Each cell appears at most once. Entries are located for removal
/// through the reverse index, which stores the exact slot they were
/// filed under.
#[derive(Debug, Default)]
pub(crate) struct OpenList {
    entries: BTreeMap<Slot, GridCoord>,
    index: HashMap<GridCoord, Slot>,
    next_seq: u64,
}

impl OpenList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a cell with the given key. The cell must not be present.
    pub(crate) fn insert(&mut self, cell: GridCoord, key: Key) {
        debug_assert!(!self.contains(cell), "cell already on the open list");
        let slot = Slot {
            key,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.entries.insert(slot, cell);
        self.index.insert(cell, slot);
    }

    /// Remove the entry for a cell. The cell must be present.
    pub(crate) fn remove(&mut self, cell: GridCoord) {
        if let Some(slot) = self.index.remove(&cell) {
            self.entries.remove(&slot);
        }
    }

    /// Replace the key of a cell, inserting it if absent.
    pub(crate) fn update(&mut self, cell: GridCoord, key: Key) {
        if let Some(slot) = self.index.remove(&cell) {
            self.entries.remove(&slot);
        }
        self.insert(cell, key);
    }

    /// The entry with the smallest key, if any.
    pub(crate) fn peek(&self) -> Option<(Key, GridCoord)> {
        self.entries
            .first_key_value()
            .map(|(slot, cell)| (slot.key, *cell))
    }

    pub(crate) fn contains(&self, cell: GridCoord) -> bool {
        self.index.contains_key(&cell)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Cells currently on the list, in no particular order.
    #[cfg(test)]
    pub(crate) fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.index.keys().copied()
    }
}
