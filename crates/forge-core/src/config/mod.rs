pub mod defaults;
pub mod presence_config;
pub mod score_config;

pub use presence_config::PresenceConfig;
pub use score_config::ScoreConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ForgeError, ForgeResult};

/// Top-level configuration, one section per subsystem. Every field has a
/// default so a partial (or missing) file is fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    pub score: ScoreConfig,
    pub presence: PresenceConfig,
}

impl ForgeConfig {
    /// Parse a TOML document.
    pub fn from_toml(input: &str) -> ForgeResult<Self> {
        toml::from_str(input).map_err(|e| ForgeError::Config {
            reason: e.to_string(),
        })
    }
}
