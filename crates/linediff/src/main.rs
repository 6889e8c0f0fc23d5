mod commands;
mod config;
mod history;

use clap::{Parser, Subcommand};
use config::{Config, OutputFormat};
use linediff_core::LineLimit;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "linediff")]
#[command(about = "Compare two texts line by line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    #[arg(long, global = true, value_name = "PATH", help = "Config file to use")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, value_name = "PATH", help = "History file to use")]
    pub history_file: Option<PathBuf>,
    #[arg(long, short, global = true, help = "Log debug output to stderr")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compare two files (use - for stdin); exits 0 when identical, 1 when they differ")]
    Diff {
        #[arg(help = "Path to the old/left text")]
        old: String,
        #[arg(help = "Path to the new/right text")]
        new: String,
        #[arg(long, short, value_enum, help = "Output format")]
        format: Option<OutputFormat>,
        #[arg(long, value_name = "N", help = "Refuse inputs with more lines (0 = no limit)")]
        max_lines: Option<usize>,
        #[arg(long, value_name = "N", help = "Refuse pairs needing a larger LCS table (0 = no limit)")]
        max_cells: Option<usize>,
        #[arg(long, help = "Do not record this comparison in the history")]
        no_history: bool,
    },
    #[command(about = "Step to the next (or previous) difference; exits 1 when one is found, 0 when there are none")]
    Jump {
        #[arg(help = "Path to the old/left text")]
        old: String,
        #[arg(help = "Path to the new/right text")]
        new: String,
        #[arg(long, value_name = "K", help = "Current cursor, as printed by a previous jump")]
        cursor: Option<usize>,
        #[arg(long, help = "Step backward instead of forward")]
        back: bool,
        #[arg(long, value_name = "N", help = "Refuse inputs with more lines (0 = no limit)")]
        max_lines: Option<usize>,
        #[arg(long, value_name = "N", help = "Refuse pairs needing a larger LCS table (0 = no limit)")]
        max_cells: Option<usize>,
    },
    #[command(about = "Show recent comparisons")]
    History {
        #[arg(long, help = "Forget all recorded comparisons")]
        clear: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    let history_path = cli
        .history_file
        .or_else(|| config.history_path.clone())
        .or_else(history::default_path);

    match cli.command {
        Commands::Diff {
            old,
            new,
            format,
            max_lines,
            max_cells,
            no_history,
        } => {
            let limit = line_limit(&config, max_lines, max_cells);
            let record_to = if config.history && !no_history {
                history_path.as_deref()
            } else {
                None
            };
            commands::diff::run(
                &old,
                &new,
                format.unwrap_or(config.format),
                limit,
                record_to,
            )
        }
        Commands::Jump {
            old,
            new,
            cursor,
            back,
            max_lines,
            max_cells,
        } => {
            let limit = line_limit(&config, max_lines, max_cells);
            commands::jump::run(&old, &new, cursor, back, limit)
        }
        Commands::History { clear } => commands::history::run(history_path.as_deref(), clear),
    }
}

/// Config limits, with command-line flags taking precedence
fn line_limit(config: &Config, max_lines: Option<usize>, max_cells: Option<usize>) -> LineLimit {
    let limit = config.line_limit();
    LineLimit {
        max_lines: max_lines.unwrap_or(limit.max_lines),
        max_cells: max_cells.unwrap_or(limit.max_cells),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}
