use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Delivery lifecycle. `Dropped` is terminal but the row is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    InProgress,
    Completed,
    Verified,
    Dropped,
}

/// A unit of work a builder claims to have produced.
///
/// Invariant: `status == Verified` implies a verification record exists
/// for this delivery (enforced by the verification pipeline, which is the
/// only writer of that status).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Delivery {
    /// UUID v4 identifier.
    pub id: String,
    pub builder_id: String,
    pub title: String,
    pub status: DeliveryStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub deployment_url: Option<String>,
    pub repo_url: Option<String>,
    /// Tech-stack tags ("rust", "postgres", "stripe", ...).
    pub stack: Vec<String>,
    /// Link to a team project, when the delivery was made under one.
    pub project_id: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Last content update, if the builder ever edited the delivery.
    pub updated_at: Option<DateTime<Utc>>,
}
