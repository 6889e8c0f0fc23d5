pub mod diff;
pub mod history;
pub mod jump;

use anyhow::{bail, Context, Result};
use linediff_core::LineLimit;
use std::io::Read;

/// The two texts being compared, with display labels
pub struct Inputs {
    pub old: String,
    pub new: String,
    pub old_label: String,
    pub new_label: String,
}

/// Read both inputs (`-` is stdin, allowed for one side) and apply the
/// line limit before any diffing happens.
pub fn read_inputs(old: &str, new: &str, limit: LineLimit) -> Result<Inputs> {
    if old == "-" && new == "-" {
        bail!("Only one input can be read from stdin");
    }

    let inputs = Inputs {
        old: read_input(old)?,
        new: read_input(new)?,
        old_label: label(old),
        new_label: label(new),
    };

    limit
        .check(&inputs.old, &inputs.new)
        .context("Input too large to compare")?;

    Ok(inputs)
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read input: {}", path))
}

fn label(path: &str) -> String {
    if path == "-" {
        "<stdin>".to_string()
    } else {
        path.to_string()
    }
}
