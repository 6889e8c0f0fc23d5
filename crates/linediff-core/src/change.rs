//! Entry representation for diff results

use serde::{Deserialize, Serialize};

/// The kind of a diff entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Line is present on both sides
    Equal,
    /// Line exists only on the right side
    Add,
    /// Line exists only on the left side
    Delete,
    /// A deleted line immediately followed by an added line
    Change,
}

/// One line-level unit of a diff.
///
/// `old` is always text from the left input and `new` is always text from
/// the right input, so reading every `old` in order rebuilds the left side
/// and every `new` rebuilds the right side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiffEntry {
    Equal { old: String, new: String },
    Add { new: String },
    Delete { old: String },
    Change { old: String, new: String },
}

impl DiffEntry {
    pub fn equal(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self::Equal {
            old: old.into(),
            new: new.into(),
        }
    }

    pub fn add(new: impl Into<String>) -> Self {
        Self::Add { new: new.into() }
    }

    pub fn delete(old: impl Into<String>) -> Self {
        Self::Delete { old: old.into() }
    }

    pub fn change(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self::Change {
            old: old.into(),
            new: new.into(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Equal { .. } => EntryKind::Equal,
            Self::Add { .. } => EntryKind::Add,
            Self::Delete { .. } => EntryKind::Delete,
            Self::Change { .. } => EntryKind::Change,
        }
    }

    /// Left-side text, absent for `Add`
    pub fn old_text(&self) -> Option<&str> {
        match self {
            Self::Equal { old, .. } | Self::Delete { old } | Self::Change { old, .. } => {
                Some(old)
            }
            Self::Add { .. } => None,
        }
    }

    /// Right-side text, absent for `Delete`
    pub fn new_text(&self) -> Option<&str> {
        match self {
            Self::Equal { new, .. } | Self::Add { new } | Self::Change { new, .. } => Some(new),
            Self::Delete { .. } => None,
        }
    }

    /// Check if this is an actual change (not just context)
    pub fn is_change(&self) -> bool {
        self.kind() != EntryKind::Equal
    }

    /// The same entry seen from the other side of the comparison
    pub fn mirrored(&self) -> Self {
        match self {
            Self::Equal { old, new } => Self::equal(new.clone(), old.clone()),
            Self::Add { new } => Self::delete(new.clone()),
            Self::Delete { old } => Self::add(old.clone()),
            Self::Change { old, new } => Self::change(new.clone(), old.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_texts() {
        let entry = DiffEntry::change("before", "after");
        assert_eq!(entry.old_text(), Some("before"));
        assert_eq!(entry.new_text(), Some("after"));

        assert_eq!(DiffEntry::add("x").old_text(), None);
        assert_eq!(DiffEntry::delete("x").new_text(), None);
    }

    #[test]
    fn test_is_change() {
        assert!(!DiffEntry::equal("a", "a").is_change());
        assert!(DiffEntry::add("a").is_change());
        assert!(DiffEntry::delete("a").is_change());
        assert!(DiffEntry::change("a", "b").is_change());
    }

    #[test]
    fn test_mirrored_swaps_sides() {
        assert_eq!(DiffEntry::add("a").mirrored(), DiffEntry::delete("a"));
        assert_eq!(DiffEntry::delete("a").mirrored(), DiffEntry::add("a"));
        assert_eq!(
            DiffEntry::change("a", "b").mirrored(),
            DiffEntry::change("b", "a")
        );
        assert_eq!(
            DiffEntry::equal("a", "a").mirrored(),
            DiffEntry::equal("a", "a")
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(DiffEntry::change("a", "b")).unwrap();
        assert_eq!(json["kind"], "change");
        assert_eq!(json["old"], "a");
        assert_eq!(json["new"], "b");

        let json = serde_json::to_value(DiffEntry::add("x")).unwrap();
        assert_eq!(json["kind"], "add");
        assert!(json.get("old").is_none());
    }
}
