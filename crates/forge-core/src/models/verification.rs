use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Overall outcome of a verification run over a delivery's evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// No check could be assessed at all.
    Pending,
    /// Every assessed check passed.
    Verified,
    /// Some assessed checks passed, some failed.
    Partial,
    /// At least one check was assessed and none passed.
    Failed,
}

/// Per-delivery snapshot of check outcomes. One row per delivery, upserted
/// on every run.
///
/// Each check is tri-state: `None` means "no evidence to judge" and is
/// excluded from the overall-status classification, NOT treated as a failure.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VerificationRecord {
    pub delivery_id: String,
    pub deployment_reachable: Option<bool>,
    pub repo_exists: Option<bool>,
    pub timeline_verified: Option<bool>,
    pub collaborator_confirmed: Option<bool>,
    pub overall_status: OverallStatus,
    pub last_checked_at: DateTime<Utc>,
}
