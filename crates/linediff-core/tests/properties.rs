use linediff_core::{
    compute_diff, compute_stats, diff_index, split_lines, DiffEntry, DiffIndex, EntryKind, Stats,
};
use proptest::prelude::*;

/// Inputs whose alignment has no equal-length alternative other than
/// single-line replacements, so the diff in one direction mirrors the other.
const MIRROR_CORPUS: &[(&str, &str)] = &[
    ("", ""),
    ("", "one\ntwo"),
    ("line1\nline2", "line1\nline3"),
    ("a\nb\nc", "a\nc"),
    ("a\nc", "a\nb\nc"),
    ("a", "b"),
    ("a", "a\nb"),
    (
        "head\nold\ntail\nkeep\ngone",
        "head\nnew\ntail\nkeep",
    ),
];

/// Short lines over a tiny alphabet, so repeats, empty lines and trailing
/// newlines turn up often.
fn multiline_string() -> impl Strategy<Value = String> {
    prop::collection::vec("[abc]{0,2}", 0..8).prop_map(|lines| lines.join("\n"))
}

fn non_equal_count(entries: &[DiffEntry]) -> usize {
    entries.iter().filter(|e| e.kind() != EntryKind::Equal).count()
}

proptest! {
    #[test]
    fn identical_inputs_are_all_equal(text in multiline_string()) {
        let result = compute_diff(&text, &text);
        let lines = split_lines(&text);

        prop_assert_eq!(result.len(), lines.len());
        for (entry, line) in result.iter().zip(&lines) {
            prop_assert_eq!(entry, &DiffEntry::equal(*line, *line));
        }
        prop_assert!(result.is_identical());
    }

    #[test]
    fn entries_reconstruct_both_inputs(old in multiline_string(), new in multiline_string()) {
        let result = compute_diff(&old, &new);

        let rebuilt_old: Vec<&str> = result
            .iter()
            .filter(|e| e.kind() != EntryKind::Add)
            .filter_map(DiffEntry::old_text)
            .collect();
        let rebuilt_new: Vec<&str> = result
            .iter()
            .filter(|e| e.kind() != EntryKind::Delete)
            .filter_map(DiffEntry::new_text)
            .collect();

        prop_assert_eq!(rebuilt_old, split_lines(&old));
        prop_assert_eq!(rebuilt_new, split_lines(&new));
    }

    #[test]
    fn only_identical_inputs_have_no_differences(old in multiline_string(), new in multiline_string()) {
        let result = compute_diff(&old, &new);
        prop_assert_eq!(result.is_identical(), old == new);
    }

    #[test]
    fn stats_count_every_difference(old in multiline_string(), new in multiline_string()) {
        let result = compute_diff(&old, &new);
        let stats = compute_stats(&result);

        prop_assert_eq!(
            stats.add + stats.delete + stats.change,
            non_equal_count(result.entries())
        );
    }

    #[test]
    fn index_points_at_every_difference(old in multiline_string(), new in multiline_string()) {
        let result = compute_diff(&old, &new);
        let positions = diff_index(&result);

        prop_assert_eq!(positions.len(), non_equal_count(result.entries()));
        for p in &positions {
            prop_assert!(result[*p].is_change());
        }
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn navigation_is_cyclic(old in multiline_string(), new in multiline_string()) {
        let index = DiffIndex::new(&compute_diff(&old, &new));
        if index.is_empty() {
            prop_assert_eq!(index.next(None), None);
            prop_assert_eq!(index.prev(None), None);
        } else {
            prop_assert_eq!(index.next(None), Some(0));
            prop_assert_eq!(index.prev(None), Some(index.len() - 1));

            for start in 0..index.len() {
                prop_assert_eq!(index.prev(index.next(Some(start))), Some(start));

                let mut cursor = Some(start);
                for _ in 0..index.len() {
                    cursor = index.next(cursor);
                }
                prop_assert_eq!(cursor, Some(start));

                for _ in 0..index.len() {
                    cursor = index.prev(cursor);
                }
                prop_assert_eq!(cursor, Some(start));
            }
        }
    }
}

#[test]
fn mirror_symmetry() {
    for (old, new) in MIRROR_CORPUS {
        let forward = compute_diff(old, new);
        let backward = compute_diff(new, old);

        assert_eq!(forward.mirrored(), backward, "{old:?} vs {new:?}");
    }
}

#[test]
fn mirror_length_depends_on_alignment() {
    // Both directions keep three lines but pair them differently, so only
    // one direction merges a change
    let forward = compute_diff("a\na\n\nca", "\na\nca");
    let backward = compute_diff("\na\nca", "a\na\n\nca");

    assert_eq!(
        forward.entries(),
        &[
            DiffEntry::delete("a"),
            DiffEntry::delete("a"),
            DiffEntry::equal("", ""),
            DiffEntry::add("a"),
            DiffEntry::equal("ca", "ca"),
        ]
    );
    assert_eq!(
        backward.entries(),
        &[
            DiffEntry::change("", "a"),
            DiffEntry::equal("a", "a"),
            DiffEntry::add(""),
            DiffEntry::equal("ca", "ca"),
        ]
    );
    assert_ne!(forward.len(), backward.len());
}

#[test]
fn changed_line() {
    let result = compute_diff("line1\nline2", "line1\nline3");

    assert_eq!(
        result.entries(),
        &[
            DiffEntry::equal("line1", "line1"),
            DiffEntry::change("line2", "line3"),
        ]
    );
    assert_eq!(
        compute_stats(&result),
        Stats {
            add: 0,
            delete: 0,
            change: 1
        }
    );
}

#[test]
fn removed_line() {
    let result = compute_diff("a\nb\nc", "a\nc");

    assert_eq!(
        result.entries(),
        &[
            DiffEntry::equal("a", "a"),
            DiffEntry::delete("b"),
            DiffEntry::equal("c", "c"),
        ]
    );
    assert_eq!(
        compute_stats(&result),
        Stats {
            add: 0,
            delete: 1,
            change: 0
        }
    );
}

#[test]
fn empty_inputs() {
    let result = compute_diff("", "");

    assert!(result.is_empty());
    assert_eq!(compute_stats(&result), Stats::default());
    assert!(diff_index(&result).is_empty());
}
