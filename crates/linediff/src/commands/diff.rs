use super::{read_inputs, Inputs};
use crate::config::OutputFormat;
use crate::history::{History, Summary, TextPair};
use anyhow::Result;
use linediff_core::{compute_diff, diff_index, export, DiffResult, Hunk, LineLimit, Stats};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Serialize)]
struct JsonReport<'a> {
    entries: &'a DiffResult,
    stats: Stats,
    index: Vec<usize>,
    hunks: Vec<Hunk>,
}

pub fn run(
    old: &str,
    new: &str,
    format: OutputFormat,
    limit: LineLimit,
    history_path: Option<&Path>,
) -> Result<ExitCode> {
    let inputs = read_inputs(old, new, limit)?;
    let result = compute_diff(&inputs.old, &inputs.new);
    let stats = result.stats();

    info!(
        old = %inputs.old_label,
        new = %inputs.new_label,
        add = stats.add,
        delete = stats.delete,
        change = stats.change,
        "compared inputs"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            if !result.is_empty() {
                writeln!(handle, "{}", export::to_text(&result))?;
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                entries: &result,
                stats,
                index: diff_index(&result),
                hunks: result.hunks(),
            };
            writeln!(handle, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Stats => {
            writeln!(handle, "{}", format_stats(&stats))?;
        }
    }

    if let Some(path) = history_path {
        if let Err(err) = record(path, inputs, stats) {
            warn!("Failed to record history: {:#}", err);
        }
    }

    Ok(if result.is_identical() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

pub fn format_stats(stats: &Stats) -> String {
    format!("+{} -{} ~{}", stats.add, stats.delete, stats.change)
}

fn record(path: &Path, inputs: Inputs, stats: Stats) -> Result<()> {
    let mut history = History::load(path)?;
    history.record(
        TextPair {
            old: inputs.old,
            new: inputs.new,
        },
        Summary {
            stats,
            timestamp: chrono::Utc::now(),
            old_label: inputs.old_label,
            new_label: inputs.new_label,
        },
    );
    history.save(path)
}
