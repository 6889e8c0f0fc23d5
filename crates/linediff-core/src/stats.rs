//! Aggregate counts over a diff result

use crate::change::{DiffEntry, EntryKind};
use crate::diff::DiffResult;
use serde::{Deserialize, Serialize};

/// Number of added, deleted and changed entries. `Equal` entries are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub add: usize,
    pub delete: usize,
    pub change: usize,
}

impl Stats {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a DiffEntry>) -> Self {
        let mut stats = Self::default();
        for entry in entries {
            match entry.kind() {
                EntryKind::Add => stats.add += 1,
                EntryKind::Delete => stats.delete += 1,
                EntryKind::Change => stats.change += 1,
                EntryKind::Equal => {}
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.add + self.delete + self.change
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Count the entries of each kind in a result
pub fn compute_stats(result: &DiffResult) -> Stats {
    Stats::from_entries(result)
}
