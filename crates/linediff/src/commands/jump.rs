use super::read_inputs;
use anyhow::Result;
use linediff_core::{compute_diff, export, DiffIndex, LineLimit};
use std::io::{self, Write};
use std::process::ExitCode;

/// Move the cursor one difference forward (or back) and print where it lands.
///
/// Output is `CURSOR/TOTAL @ENTRY: <line>`, with `CURSOR` 0-based so it
/// can be fed back through `--cursor`. Exits 1 when it lands on a
/// difference, like `diff`, and 0 when the inputs are identical.
pub fn run(
    old: &str,
    new: &str,
    cursor: Option<usize>,
    back: bool,
    limit: LineLimit,
) -> Result<ExitCode> {
    let inputs = read_inputs(old, new, limit)?;
    let result = compute_diff(&inputs.old, &inputs.new);
    let index = DiffIndex::new(&result);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let moved = if back {
        index.prev(cursor)
    } else {
        index.next(cursor)
    };

    match (moved, index.entry_at(moved)) {
        (Some(k), Some(position)) => {
            writeln!(
                handle,
                "{}/{} @{}: {}",
                k,
                index.len(),
                position,
                export::entry_line(&result[position])
            )?;
            Ok(ExitCode::from(1))
        }
        _ => {
            writeln!(handle, "no differences")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
