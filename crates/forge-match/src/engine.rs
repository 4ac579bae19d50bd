use chrono::{DateTime, Utc};
use tracing::{debug, info};

use forge_core::constants::{OWNER_MATCH_PAGE_SIZE, ROLE_MATCH_PAGE_SIZE};
use forge_core::errors::{ForgeResult, RepositoryError};
use forge_core::models::{
    Builder, CompatibilityBreakdown, DeliveryStatus, MatchOutcome, Project,
};
use forge_core::traits::{
    IBuilderRepository, IDeliveryRepository, IInvitationRepository, IProjectRepository,
};

use crate::acceptance;
use crate::compatibility::{self, BuilderHistory};
use crate::ranking;

/// Orchestrates one matching request: load the candidate pool, score
/// compatibility and acceptance per candidate, rank, truncate.
pub struct MatchEngine<'a> {
    builders: &'a dyn IBuilderRepository,
    projects: &'a dyn IProjectRepository,
    deliveries: &'a dyn IDeliveryRepository,
    invitations: &'a dyn IInvitationRepository,
}

impl<'a> MatchEngine<'a> {
    pub fn new(
        builders: &'a dyn IBuilderRepository,
        projects: &'a dyn IProjectRepository,
        deliveries: &'a dyn IDeliveryRepository,
        invitations: &'a dyn IInvitationRepository,
    ) -> Self {
        Self {
            builders,
            projects,
            deliveries,
            invitations,
        }
    }

    /// Project-owner match view: full pool minus the owner, page of 10.
    pub fn match_for_project(
        &self,
        project_id: &str,
        now: DateTime<Utc>,
    ) -> ForgeResult<Vec<MatchOutcome>> {
        let project = self.load_project(project_id)?;
        let pool = self.builders.matching_pool(&project.owner_id)?;
        self.evaluate_pool(&project, pool, now, OWNER_MATCH_PAGE_SIZE)
    }

    /// Role-based matcher: coarser pool filtered by role, page of 20.
    pub fn match_for_role(
        &self,
        project_id: &str,
        role: &str,
        now: DateTime<Utc>,
    ) -> ForgeResult<Vec<MatchOutcome>> {
        let project = self.load_project(project_id)?;
        let pool = self.builders.by_role(role)?;
        self.evaluate_pool(&project, pool, now, ROLE_MATCH_PAGE_SIZE)
    }

    fn load_project(&self, project_id: &str) -> ForgeResult<Project> {
        self.projects
            .get(project_id)?
            .ok_or_else(|| RepositoryError::not_found("project", project_id).into())
    }

    fn evaluate_pool(
        &self,
        project: &Project,
        pool: Vec<Builder>,
        now: DateTime<Utc>,
        limit: usize,
    ) -> ForgeResult<Vec<MatchOutcome>> {
        // The owner's credibility feeds every candidate's acceptance term.
        let owner_forge_score = self
            .builders
            .get(&project.owner_id)?
            .map(|owner| owner.forge_score)
            .unwrap_or(0);

        debug!(
            project_id = %project.id,
            candidates = pool.len(),
            "evaluating candidate pool"
        );

        let mut outcomes = Vec::with_capacity(pool.len());
        for builder in &pool {
            outcomes.push(self.evaluate(project, owner_forge_score, builder, now)?);
        }

        let ranked = ranking::rank(outcomes, limit);

        info!(
            project_id = %project.id,
            returned = ranked.len(),
            limit,
            "matching complete"
        );

        Ok(ranked)
    }

    fn evaluate(
        &self,
        project: &Project,
        owner_forge_score: u32,
        builder: &Builder,
        now: DateTime<Utc>,
    ) -> ForgeResult<MatchOutcome> {
        let history = self.builder_history(&builder.id)?;
        let compat = compatibility::compatibility(project, builder, &history);

        let invites = self.invitations.history_for(&builder.id, now)?;
        let accept = acceptance::estimate(
            builder.availability,
            project,
            owner_forge_score,
            &invites,
            compat.score_percent,
        );

        Ok(MatchOutcome {
            builder_id: builder.id.clone(),
            score: compat.score_percent,
            explanation: explanation(&compat, &history),
            capability_fit: compat.capability_fit,
            reliability_fit: compat.reliability_fit,
            commitment_fit: compat.commitment_fit,
            delivery_history_fit: compat.delivery_history_fit,
            forge_score: builder.forge_score,
            acceptance: accept,
        })
    }

    /// Verified-delivery count and stack tags for the history facet.
    fn builder_history(&self, builder_id: &str) -> ForgeResult<BuilderHistory> {
        let deliveries = self.deliveries.for_builder(builder_id)?;
        let mut stack_tags: Vec<String> = Vec::new();
        let mut verified = 0u32;
        for d in &deliveries {
            if d.status != DeliveryStatus::Verified {
                continue;
            }
            verified += 1;
            for tag in &d.stack {
                let tag = tag.to_lowercase();
                if !stack_tags.contains(&tag) {
                    stack_tags.push(tag);
                }
            }
        }
        Ok(BuilderHistory {
            verified_deliveries: verified,
            stack_tags,
        })
    }
}

/// One-line human summary: the strongest facet plus delivery volume.
fn explanation(compat: &CompatibilityBreakdown, history: &BuilderHistory) -> String {
    let facets = [
        ("capability", compat.capability_fit),
        ("reliability", compat.reliability_fit),
        ("commitment", compat.commitment_fit),
        ("delivery history", compat.delivery_history_fit),
    ];
    let (label, value) = facets
        .iter()
        .max_by_key(|(_, v)| *v)
        .copied()
        .unwrap_or(("capability", 0));

    format!(
        "{}% overall fit, led by {} ({}%), {} verified deliveries",
        compat.score_percent, label, value, history.verified_deliveries
    )
}
