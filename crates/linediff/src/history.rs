//! Persisted comparison history

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use linediff_core::Stats;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Number of summaries kept, newest first
pub const MAX_SUMMARIES: usize = 10;

/// The raw inputs of the latest comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    pub old: String,
    pub new: String,
}

/// One recorded comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub stats: Stats,
    pub timestamp: DateTime<Utc>,
    pub old_label: String,
    pub new_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    pub last_pair: Option<TextPair>,
    #[serde(default)]
    pub summaries: Vec<Summary>,
}

impl History {
    /// Load from disk; a missing file is an empty history
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read history: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse history: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write history: {}", path.display()))?;
        debug!(path = %path.display(), summaries = self.summaries.len(), "saved history");
        Ok(())
    }

    /// Remember a comparison, dropping the oldest summary past the cap
    pub fn record(&mut self, pair: TextPair, summary: Summary) {
        self.last_pair = Some(pair);
        self.summaries.insert(0, summary);
        self.summaries.truncate(MAX_SUMMARIES);
    }
}

/// `<data dir>/linediff/history.json`
pub fn default_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("linediff").join("history.json"))
}
