//! Splitting raw text into comparable lines

/// Split text on `'\n'` without trimming anything.
///
/// Empty input yields no lines. Otherwise every newline starts a new line,
/// so a trailing newline produces a final empty line and a `'\r'` before a
/// newline stays part of its line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}
