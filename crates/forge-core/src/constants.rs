/// Forge system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of the forge score scale.
pub const MAX_SCORE: u32 = 1000;

/// Upper bound of the confidence scale.
pub const MAX_CONFIDENCE: u8 = 100;

/// Dimension weights. Must sum to 1.0.
pub const WEIGHT_DELIVERY_SUCCESS: f64 = 0.45;
pub const WEIGHT_RELIABILITY: f64 = 0.30;
pub const WEIGHT_DELIVERY_QUALITY: f64 = 0.15;
pub const WEIGHT_CONSISTENCY: f64 = 0.10;

/// Floor applied to a zero-confidence score: effective = score × (0.6 + 0.4·c/100).
pub const EFFECTIVE_SCORE_FLOOR: f64 = 0.6;

/// Days a delivery must have been running to count as sustained.
pub const SUSTAINED_DELIVERY_DAYS: i64 = 90;

/// Timeline verification rejects durations at or above this many days.
pub const TIMELINE_MAX_DAYS: i64 = 365;

/// Recency at or beyond this many days zeroes the consistency component.
pub const CONSISTENCY_RECENCY_CUTOFF_DAYS: u32 = 180;

/// Default recency when a builder has no qualifying activity at all.
pub const RECENCY_DEFAULT_DAYS: u32 = 365;

/// Candidate page size for the project-owner match view.
pub const OWNER_MATCH_PAGE_SIZE: usize = 10;

/// Candidate page size for the coarser role-based matcher.
pub const ROLE_MATCH_PAGE_SIZE: usize = 20;
