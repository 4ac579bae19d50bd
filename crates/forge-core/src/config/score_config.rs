use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Advertised minimum interval between recomputes per builder (seconds).
    pub recompute_interval_secs: u64,
    /// Allow falling back to the legacy four-input strategy.
    pub legacy_fallback: bool,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            recompute_interval_secs: defaults::DEFAULT_RECOMPUTE_INTERVAL_SECS,
            legacy_fallback: defaults::DEFAULT_LEGACY_FALLBACK,
        }
    }
}
