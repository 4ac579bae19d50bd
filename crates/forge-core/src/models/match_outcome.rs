use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Builder–project compatibility, 0–100, with the four fit facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompatibilityBreakdown {
    pub score_percent: u8,
    pub capability_fit: u8,
    pub reliability_fit: u8,
    pub commitment_fit: u8,
    pub delivery_history_fit: u8,
}

/// How much invitation history backs an acceptance estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AcceptanceConfidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for AcceptanceConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Probability-like estimate that a builder accepts an invitation.
/// Always 5–95, never certain either way. Carries 1–3 reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AcceptanceEstimate {
    pub percent: u8,
    pub confidence: AcceptanceConfidence,
    pub reasons: Vec<String>,
}

/// One ranked candidate in a match response.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchOutcome {
    pub builder_id: String,
    /// Compatibility percentage this candidate was ranked by.
    pub score: u8,
    pub explanation: String,
    pub capability_fit: u8,
    pub reliability_fit: u8,
    pub commitment_fit: u8,
    pub delivery_history_fit: u8,
    /// Raw forge score, the ranking tie-break.
    pub forge_score: u32,
    pub acceptance: AcceptanceEstimate,
}
