pub mod repositories;
pub mod scoring;
pub mod skill_scorer;

pub use repositories::{
    IActivityRepository, IBuilderRepository, IDeliveryRepository, IEvidenceRepository,
    IInvitationRepository, IMembershipRepository, IProjectRepository, IScoreRepository,
    IVerificationRepository,
};
pub use scoring::IScoringStrategy;
pub use skill_scorer::{ISkillScorer, SkillAssessment, SkillScoreRequest};
