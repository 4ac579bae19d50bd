use tracing::info;

use forge_core::errors::{ForgeResult, RepositoryError};
use forge_core::traits::{IBuilderRepository, ISkillScorer, SkillAssessment, SkillScoreRequest};

/// Pushes merged signals through the opaque AI skill scorer and stores the
/// returned assessment on the builder. Scorer failures propagate; retry
/// policy lives with the scorer's own client, not here.
pub struct SkillRefresh<'a> {
    builders: &'a dyn IBuilderRepository,
    scorer: &'a dyn ISkillScorer,
}

impl<'a> SkillRefresh<'a> {
    pub fn new(builders: &'a dyn IBuilderRepository, scorer: &'a dyn ISkillScorer) -> Self {
        Self { builders, scorer }
    }

    pub fn refresh(
        &self,
        builder_id: &str,
        signals: serde_json::Value,
        verified_deliveries: u32,
        distinct_collaborators: u32,
    ) -> ForgeResult<SkillAssessment> {
        let builder = self
            .builders
            .get(builder_id)?
            .ok_or_else(|| RepositoryError::not_found("builder", builder_id))?;

        let request = SkillScoreRequest {
            builder_id: builder.id.clone(),
            self_reported: builder.skills,
            verified_deliveries,
            distinct_collaborators,
            signals,
        };

        let assessment = self.scorer.assess(&request)?;
        self.builders
            .update_skills(builder_id, assessment.skills, assessment.confidence)?;

        info!(
            builder_id,
            confidence = assessment.confidence,
            "skill assessment stored"
        );

        Ok(assessment)
    }
}
