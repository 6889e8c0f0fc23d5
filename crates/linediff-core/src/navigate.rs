//! Cyclic navigation between differences
//!
//! A [`DiffIndex`] lists where the non-equal entries of a [`DiffResult`]
//! sit. The cursor is not stored in the index: callers keep an
//! `Option<usize>` (an offset into [`DiffIndex::positions`]) and pass it to
//! [`DiffIndex::next`] or [`DiffIndex::prev`] to get the moved cursor back.

use crate::diff::DiffResult;

/// Ordered positions of the non-equal entries of a result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffIndex {
    positions: Vec<usize>,
}

impl DiffIndex {
    pub fn new(result: &DiffResult) -> Self {
        Self {
            positions: diff_index(result),
        }
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Move forward, wrapping from the last difference to the first.
    ///
    /// An absent cursor moves to the first difference. Returns `None` only
    /// when there are no differences.
    pub fn next(&self, cursor: Option<usize>) -> Option<usize> {
        if self.positions.is_empty() {
            return None;
        }
        Some(match cursor {
            Some(k) if k + 1 < self.positions.len() => k + 1,
            Some(_) | None => 0,
        })
    }

    /// Move backward, wrapping from the first difference to the last.
    ///
    /// An absent cursor moves to the last difference. Returns `None` only
    /// when there are no differences.
    pub fn prev(&self, cursor: Option<usize>) -> Option<usize> {
        let last = self.positions.len().checked_sub(1)?;
        Some(match cursor {
            Some(k) if k > 0 && k <= last => k - 1,
            Some(_) | None => last,
        })
    }

    /// Entry position in the result the cursor points at
    pub fn entry_at(&self, cursor: Option<usize>) -> Option<usize> {
        cursor.and_then(|k| self.positions.get(k).copied())
    }

    /// Cursor of the first difference at or after an entry position,
    /// wrapping around to the first difference.
    pub fn nearest(&self, position: usize) -> Option<usize> {
        if self.positions.is_empty() {
            return None;
        }
        // positions are strictly increasing
        let k = self.positions.partition_point(|&p| p < position);
        Some(if k < self.positions.len() { k } else { 0 })
    }
}

/// Positions of all entries that are not `Equal`, in order
pub fn diff_index(result: &DiffResult) -> Vec<usize> {
    result
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_change())
        .map(|(position, _)| position)
        .collect()
}
