use serde::{Deserialize, Serialize};

use crate::errors::SkillScorerError;
use crate::models::SkillSet;

/// What the external scorer gets to look at. The `signals` blob is opaque
/// merged evidence; this core never inspects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillScoreRequest {
    pub builder_id: String,
    pub self_reported: SkillSet,
    pub verified_deliveries: u32,
    pub distinct_collaborators: u32,
    pub signals: serde_json::Value,
}

/// Five 0–100 skill scores plus a confidence and free-text justification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub skills: SkillSet,
    pub confidence: u8,
    pub justification: String,
}

/// The opaque AI skill scorer. No retry or timeout logic behind this trait;
/// failures propagate to the caller layer.
pub trait ISkillScorer: Send + Sync {
    fn assess(&self, request: &SkillScoreRequest) -> Result<SkillAssessment, SkillScorerError>;
}
