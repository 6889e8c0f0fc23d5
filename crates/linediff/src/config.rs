//! Configuration file support

use anyhow::{Context, Result};
use clap::ValueEnum;
use linediff_core::LineLimit;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How `diff` prints its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One prefixed line per entry
    #[default]
    Text,
    /// Entries, stats, index and hunks as JSON
    Json,
    /// Counts only
    Stats,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-side line limit, 0 disables it
    pub max_lines: usize,
    /// Bound on `(old lines + 1) * (new lines + 1)`, 0 disables it
    pub max_cells: usize,
    /// Default output format
    pub format: OutputFormat,
    /// Record comparisons in the history file
    pub history: bool,
    /// History file location override
    pub history_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_lines: LineLimit::DEFAULT_MAX_LINES,
            max_cells: LineLimit::DEFAULT_MAX_CELLS,
            format: OutputFormat::Text,
            history: true,
            history_path: None,
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the default location if present.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn line_limit(&self) -> LineLimit {
        LineLimit::new(self.max_lines).with_max_cells(self.max_cells)
    }
}

/// `<config dir>/linediff/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("linediff").join("config.toml"))
}
