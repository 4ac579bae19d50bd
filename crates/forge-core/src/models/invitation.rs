use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
    Expired,
    Withdrawn,
}

/// A directed sender→builder edge for a project.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invitation {
    /// UUID v4 identifier.
    pub id: String,
    pub project_id: String,
    pub sender_id: String,
    pub builder_id: String,
    pub status: InvitationStatus,
    pub sent_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// A builder's invitation history, summarized by the repository layer.
/// Feeds the acceptance-likelihood estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InviteHistory {
    /// Invitations ever received.
    pub received: u32,
    pub accepted: u32,
    pub declined: u32,
    /// Invitations received in the trailing 7 days, for the spam penalty.
    pub recent_7d: u32,
}

impl InviteHistory {
    /// Accepted + declined. Expired and withdrawn invites are not responses.
    pub fn responses(&self) -> u32 {
        self.accepted + self.declined
    }
}
