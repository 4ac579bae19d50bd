use chrono::{DateTime, Utc};

use crate::errors::ForgeResult;
use crate::models::{
    ActivityEvent, Builder, Delivery, DeliveryStatus, Evidence, ForgeScoreRecord, InviteHistory,
    Project, SkillSet, TeamMembership, VerificationRecord,
};

/// Builder rows plus the candidate pools the matchers draw from.
pub trait IBuilderRepository: Send + Sync {
    fn get(&self, id: &str) -> ForgeResult<Option<Builder>>;
    /// Candidate pool for the project-owner match view. Excludes the owner.
    fn matching_pool(&self, exclude_builder: &str) -> ForgeResult<Vec<Builder>>;
    /// Candidate pool for the role-based matcher.
    fn by_role(&self, role: &str) -> ForgeResult<Vec<Builder>>;
    /// Store scorer output on the builder profile.
    fn update_skills(&self, id: &str, skills: SkillSet, confidence: u8) -> ForgeResult<()>;
}

pub trait IDeliveryRepository: Send + Sync {
    fn get(&self, id: &str) -> ForgeResult<Option<Delivery>>;
    fn for_builder(&self, builder_id: &str) -> ForgeResult<Vec<Delivery>>;
    fn set_status(&self, id: &str, status: DeliveryStatus) -> ForgeResult<()>;
}

pub trait IEvidenceRepository: Send + Sync {
    fn for_delivery(&self, delivery_id: &str) -> ForgeResult<Vec<Evidence>>;
}

/// One verification row per delivery, upsert semantics.
pub trait IVerificationRepository: Send + Sync {
    fn for_delivery(&self, delivery_id: &str) -> ForgeResult<Option<VerificationRecord>>;
    fn upsert(&self, record: &VerificationRecord) -> ForgeResult<()>;
}

/// Memberships are served pre-joined with the parent project's status.
pub trait IMembershipRepository: Send + Sync {
    fn for_builder(&self, builder_id: &str) -> ForgeResult<Vec<TeamMembership>>;
    /// Builders sharing a team with this builder, de-duplicated, self excluded.
    fn distinct_collaborators(&self, builder_id: &str) -> ForgeResult<Vec<String>>;
}

pub trait IActivityRepository: Send + Sync {
    fn for_builder_since(
        &self,
        builder_id: &str,
        since: DateTime<Utc>,
    ) -> ForgeResult<Vec<ActivityEvent>>;
}

pub trait IInvitationRepository: Send + Sync {
    /// Summarized invitation history for the acceptance estimator.
    fn history_for(&self, builder_id: &str, now: DateTime<Utc>) -> ForgeResult<InviteHistory>;
}

pub trait IProjectRepository: Send + Sync {
    fn get(&self, id: &str) -> ForgeResult<Option<Project>>;
}

/// One score row per builder, upsert semantics, overwritten wholesale.
pub trait IScoreRepository: Send + Sync {
    fn get(&self, builder_id: &str) -> ForgeResult<Option<ForgeScoreRecord>>;
    fn upsert(&self, record: &ForgeScoreRecord) -> ForgeResult<()>;
}
