//! Plain-text rendering of a diff result, one line per entry

use crate::change::DiffEntry;
use crate::diff::DiffResult;

/// Render a single entry with its kind prefix
pub fn entry_line(entry: &DiffEntry) -> String {
    match entry {
        DiffEntry::Equal { old, .. } => format!("  {old}"),
        DiffEntry::Add { new } => format!("+ {new}"),
        DiffEntry::Delete { old } => format!("- {old}"),
        DiffEntry::Change { old, new } => format!("~ {old} => {new}"),
    }
}

/// Render a whole result, entries joined by `'\n'` with no trailing newline
pub fn to_text(result: &DiffResult) -> String {
    result.iter().map(entry_line).collect::<Vec<_>>().join("\n")
}
