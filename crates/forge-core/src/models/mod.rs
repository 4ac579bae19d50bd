pub mod activity;
pub mod builder;
pub mod delivery;
pub mod evidence;
pub mod invitation;
pub mod match_outcome;
pub mod membership;
pub mod project;
pub mod score;
pub mod score_inputs;
pub mod verification;

pub use activity::ActivityEvent;
pub use builder::{Availability, Builder, SkillSet};
pub use delivery::{Delivery, DeliveryStatus};
pub use evidence::{Evidence, EvidenceType};
pub use invitation::{Invitation, InvitationStatus, InviteHistory};
pub use match_outcome::{
    AcceptanceConfidence, AcceptanceEstimate, CompatibilityBreakdown, MatchOutcome,
};
pub use membership::TeamMembership;
pub use project::{Project, ProjectStage, ProjectStatus};
pub use score::{ForgeScoreRecord, ScoreOutcome, ScoreStrategyKind};
pub use score_inputs::{
    ConfidenceInputs, ConsistencyInputs, DeliveryStats, DepthFlags, LegacyInputs,
    OwnershipSignals, QualityRecord, ReliabilityCounts, ScoreInputs, VerificationSignals,
};
pub use verification::{OverallStatus, VerificationRecord};
