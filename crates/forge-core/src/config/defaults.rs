/// Minimum seconds between score recomputes for one builder. The throttle
/// itself is enforced by the external queue, this is its advertised value.
pub const DEFAULT_RECOMPUTE_INTERVAL_SECS: u64 = 900;

/// Whether the legacy strategy may run when rich evidence is unavailable.
pub const DEFAULT_LEGACY_FALLBACK: bool = true;

/// TTL for the advisory live-user count.
pub const DEFAULT_PRESENCE_TTL_SECS: u64 = 12;
