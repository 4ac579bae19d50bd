use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The kind of claim a piece of evidence supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    DeploymentUrl,
    RepoUrl,
    Screenshot,
    CollaboratorAttestation,
    TimelineProof,
    Custom,
}

/// A typed, independently checkable fact attached to a delivery.
/// Append-only: verification runs read evidence, never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evidence {
    /// UUID v4 identifier.
    pub id: String,
    pub delivery_id: String,
    pub evidence_type: EvidenceType,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}
