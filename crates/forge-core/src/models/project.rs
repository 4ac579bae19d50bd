use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How far along a project is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStage {
    Idea,
    Mvp,
    Beta,
    Launched,
}

impl ProjectStage {
    /// Stages with something concrete to show are more attractive to join.
    pub fn has_traction(self) -> bool {
        matches!(self, Self::Mvp | Self::Beta | Self::Launched)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Open,
    Active,
    Completed,
    Cancelled,
    Archived,
}

impl ProjectStatus {
    /// Cancelled or archived projects count against the builders who joined them.
    pub fn is_abandoned(self) -> bool {
        matches!(self, Self::Cancelled | Self::Archived)
    }

    /// Terminal states that count as an observed outcome for confidence.
    pub fn is_outcome(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Archived)
    }
}

/// A posted work opportunity, owned by one builder.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Project {
    /// UUID v4 identifier.
    pub id: String,
    pub owner_id: String,
    pub name: String,
    /// Required skill names, lowercase ("engineering", "design", ...).
    pub required_skills: Vec<String>,
    /// Roles the project still needs, lowercase.
    pub roles_needed: Vec<String>,
    /// Free-form tags, matched against delivery stacks for history fit.
    pub tags: Vec<String>,
    pub hours_per_week_min: u32,
    pub hours_per_week_max: u32,
    pub team_size_target: u32,
    pub timeline_weeks: u32,
    pub category: String,
    pub stage: ProjectStage,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}
