use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How open a builder currently is to new work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    OpenToOpportunities,
    Busy,
    Unavailable,
}

/// The five skill dimensions, each 0–100. Zero means no evidence yet,
/// not a judgement of incompetence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkillSet {
    pub engineering: u8,
    pub design: u8,
    pub product: u8,
    pub growth: u8,
    pub operations: u8,
}

impl SkillSet {
    /// Look up a dimension by its lowercase name. Unknown names return None.
    pub fn dimension(&self, name: &str) -> Option<u8> {
        match name {
            "engineering" => Some(self.engineering),
            "design" => Some(self.design),
            "product" => Some(self.product),
            "growth" => Some(self.growth),
            "operations" => Some(self.operations),
            _ => None,
        }
    }
}

/// A platform user who delivers work and accumulates a reputation score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Builder {
    /// UUID v4 identifier.
    pub id: String,
    pub username: String,
    pub availability: Availability,
    /// 0–1000. Zero means "not computed yet".
    pub forge_score: u32,
    /// 0–100. How much verified data backs the forge score.
    pub confidence_score: u8,
    /// 0–100. Reliability as surfaced on the profile.
    pub reliability_score: u8,
    pub skills: SkillSet,
    /// Self-declared roles ("founder", "fullstack", ...), lowercase.
    pub roles: Vec<String>,
    /// Hours per week the builder says they can commit.
    pub hours_per_week: Option<u32>,
    /// Team size the builder prefers to work in.
    pub preferred_team_size: Option<u32>,
    pub created_at: DateTime<Utc>,
}
