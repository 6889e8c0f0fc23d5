use super::diff::format_stats;
use crate::history::History;
use anyhow::{bail, Result};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

pub fn run(history_path: Option<&Path>, clear: bool) -> Result<ExitCode> {
    let Some(path) = history_path else {
        bail!("No history location available; pass --history-file");
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if clear {
        History::default().save(path)?;
        writeln!(handle, "history cleared")?;
        return Ok(ExitCode::SUCCESS);
    }

    let history = History::load(path)?;
    if history.summaries.is_empty() {
        writeln!(handle, "no history")?;
        return Ok(ExitCode::SUCCESS);
    }

    for summary in &history.summaries {
        writeln!(
            handle,
            "{}  {} -> {}  {}",
            summary.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            summary.old_label,
            summary.new_label,
            format_stats(&summary.stats)
        )?;
    }

    Ok(ExitCode::SUCCESS)
}
