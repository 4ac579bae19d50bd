use chrono::{DateTime, Duration, Utc};

use forge_core::cache::TtlCell;
use forge_core::config::PresenceConfig;

/// Advisory live-user counter behind a short TTL. Staleness within the
/// TTL is acceptable; the value is display-only and never feeds scoring.
pub struct LivePresence {
    cell: TtlCell<u64>,
}

impl LivePresence {
    pub fn new(config: &PresenceConfig) -> Self {
        Self {
            cell: TtlCell::new(Duration::seconds(config.ttl_secs as i64)),
        }
    }

    /// Cached count if fresh, otherwise `fetch` is consulted and cached.
    pub fn count(&self, now: DateTime<Utc>, fetch: impl FnOnce() -> u64) -> u64 {
        self.cell.get_or_insert_with(now, fetch)
    }

    /// Forget the cached count (test hook).
    pub fn reset(&self) {
        self.cell.reset();
    }
}
