use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::project::ProjectStatus;

/// A builder's membership on a team project, joined with the parent
/// project's status so the aggregator never needs a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TeamMembership {
    pub builder_id: String,
    pub project_id: String,
    pub project_status: ProjectStatus,
    pub joined_at: DateTime<Utc>,
    /// None while the membership is current.
    pub left_at: Option<DateTime<Utc>>,
}
