//! Diff computation engine

use crate::change::DiffEntry;
use crate::lcs::{backtrack, EditOp, LcsMatrix};
use crate::lines::split_lines;
use crate::stats::Stats;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::debug;

/// A hunk is a run of consecutive non-equal entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    /// Position of this hunk among all hunks
    pub id: usize,
    /// Position of the first entry of the run in the result
    pub start: usize,
    /// Number of entries in the run
    pub len: usize,
    /// Counts over the entries of the run
    pub stats: Stats,
}

impl Hunk {
    /// Entry positions covered by this hunk
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

/// Ordered entries of one comparison.
///
/// Produced whole by the engine and never modified afterwards; a new
/// comparison yields a new result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffResult {
    entries: Vec<DiffEntry>,
}

impl DiffResult {
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<DiffEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&DiffEntry> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffEntry> {
        self.entries.iter()
    }

    /// True when both inputs had identical lines
    pub fn is_identical(&self) -> bool {
        !self.entries.iter().any(DiffEntry::is_change)
    }

    pub fn stats(&self) -> Stats {
        Stats::from_entries(&self.entries)
    }

    /// Left-side lines in order, rebuilt from the entries
    pub fn old_lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(DiffEntry::old_text)
    }

    /// Right-side lines in order, rebuilt from the entries
    pub fn new_lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(DiffEntry::new_text)
    }

    /// Swap the sides of every entry, keeping their order.
    ///
    /// This equals `compute_diff(new, old)` only when the alignment is
    /// unambiguous. Inputs with several longest common subsequences can
    /// pair lines differently in the other direction, and then the two
    /// scripts differ in entries and even in length.
    pub fn mirrored(&self) -> Self {
        Self {
            entries: self.entries.iter().map(DiffEntry::mirrored).collect(),
        }
    }

    /// Group consecutive non-equal entries into hunks
    pub fn hunks(&self) -> Vec<Hunk> {
        let mut hunks = Vec::new();
        let mut start: Option<usize> = None;

        for (position, entry) in self.entries.iter().enumerate() {
            match (entry.is_change(), start) {
                (true, None) => start = Some(position),
                (false, Some(first)) => {
                    hunks.push(self.hunk(hunks.len(), first, position));
                    start = None;
                }
                _ => {}
            }
        }

        // Don't forget a run that reaches the end
        if let Some(first) = start {
            hunks.push(self.hunk(hunks.len(), first, self.entries.len()));
        }

        hunks
    }

    fn hunk(&self, id: usize, start: usize, end: usize) -> Hunk {
        Hunk {
            id,
            start,
            len: end - start,
            stats: Stats::from_entries(&self.entries[start..end]),
        }
    }
}

impl Index<usize> for DiffResult {
    type Output = DiffEntry;

    fn index(&self, position: usize) -> &DiffEntry {
        &self.entries[position]
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a DiffEntry;
    type IntoIter = std::slice::Iter<'a, DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The main diff engine
#[derive(Debug, Clone)]
pub struct DiffEngine {
    /// Whether to collapse a deletion followed by an addition into a change
    merge_changes: bool,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self {
            merge_changes: true,
        }
    }
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merge(mut self, enabled: bool) -> Self {
        self.merge_changes = enabled;
        self
    }

    /// Compute diff between two strings
    pub fn diff_strings(&self, old: &str, new: &str) -> DiffResult {
        let old_lines = split_lines(old);
        let new_lines = split_lines(new);
        self.diff_lines(&old_lines, &new_lines)
    }

    /// Compute diff between two already-split line sequences
    pub fn diff_lines(&self, old: &[&str], new: &[&str]) -> DiffResult {
        let matrix = LcsMatrix::build(old, new);
        let ops = backtrack(&matrix, old, new);

        let entries = if self.merge_changes {
            merge_changes(&ops, old, new)
        } else {
            ops.iter().map(|op| entry_for(*op, old, new)).collect()
        };

        debug!(
            old_lines = old.len(),
            new_lines = new.len(),
            common = matrix.lcs_len(),
            entries = entries.len(),
            "computed line diff"
        );

        DiffResult { entries }
    }
}

/// Compute the merged diff of two texts
pub fn compute_diff(text_a: &str, text_b: &str) -> DiffResult {
    DiffEngine::new().diff_strings(text_a, text_b)
}

fn entry_for(op: EditOp, old: &[&str], new: &[&str]) -> DiffEntry {
    match op {
        EditOp::Equal(i, j) => DiffEntry::equal(old[i], new[j]),
        EditOp::Delete(i) => DiffEntry::delete(old[i]),
        EditOp::Add(j) => DiffEntry::add(new[j]),
    }
}

/// Single left-to-right pass: a deletion immediately followed by an
/// addition becomes one change. Nothing else is paired.
fn merge_changes(ops: &[EditOp], old: &[&str], new: &[&str]) -> Vec<DiffEntry> {
    let mut entries = Vec::with_capacity(ops.len());
    let mut k = 0;

    while k < ops.len() {
        match (ops[k], ops.get(k + 1)) {
            (EditOp::Delete(i), Some(EditOp::Add(j))) => {
                entries.push(DiffEntry::change(old[i], new[*j]));
                k += 2;
            }
            (op, _) => {
                entries.push(entry_for(op, old, new));
                k += 1;
            }
        }
    }

    entries
}
