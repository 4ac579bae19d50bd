use serde::{Deserialize, Serialize};

use super::defaults;

/// Live-presence counter configuration. The counter is advisory; staleness
/// within the TTL is acceptable, incorrectness is not a risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceConfig {
    pub ttl_secs: u64,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            ttl_secs: defaults::DEFAULT_PRESENCE_TTL_SECS,
        }
    }
}
