//! linediff core - line-based diff engine
//!
//! This library computes a line-level difference between two texts using
//! a longest-common-subsequence table, pairs adjacent deletions and
//! additions into changes, and provides statistics and cyclic navigation
//! over the differences. Everything here is pure and synchronous.

pub mod change;
pub mod diff;
pub mod export;
pub mod lcs;
pub mod limit;
pub mod lines;
pub mod navigate;
pub mod stats;

pub use change::{DiffEntry, EntryKind};
pub use diff::{compute_diff, DiffEngine, DiffResult, Hunk};
pub use limit::{LimitError, LineLimit, Side};
pub use lines::split_lines;
pub use navigate::{diff_index, DiffIndex};
pub use stats::{compute_stats, Stats};
