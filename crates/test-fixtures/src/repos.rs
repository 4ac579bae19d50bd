//! In-memory repository implementations backing integration tests.
//!
//! `fail_reads` flips every read into a `QueryFailed` error so tests can
//! assert that upstream failures propagate instead of zero-filling.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use forge_core::errors::{ForgeResult, RepositoryError};
use forge_core::models::{
    ActivityEvent, Builder, Delivery, DeliveryStatus, Evidence, ForgeScoreRecord, Invitation,
    InvitationStatus, InviteHistory, Project, SkillSet, TeamMembership, VerificationRecord,
};
use forge_core::traits::{
    IActivityRepository, IBuilderRepository, IDeliveryRepository, IEvidenceRepository,
    IInvitationRepository, IMembershipRepository, IProjectRepository, IScoreRepository,
    IVerificationRepository,
};

#[derive(Default)]
pub struct InMemoryStore {
    pub builders: Mutex<Vec<Builder>>,
    pub deliveries: Mutex<Vec<Delivery>>,
    pub evidence: Mutex<Vec<Evidence>>,
    pub verifications: Mutex<Vec<VerificationRecord>>,
    pub memberships: Mutex<Vec<TeamMembership>>,
    pub activity: Mutex<Vec<ActivityEvent>>,
    pub invitations: Mutex<Vec<Invitation>>,
    pub projects: Mutex<Vec<Project>>,
    pub scores: Mutex<Vec<ForgeScoreRecord>>,
    pub fail_reads: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn guard(&self) -> ForgeResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RepositoryError::QueryFailed {
                reason: "simulated read failure".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn add_builder(&self, builder: Builder) {
        self.builders.lock().unwrap().push(builder);
    }

    pub fn add_delivery(&self, delivery: Delivery) {
        self.deliveries.lock().unwrap().push(delivery);
    }

    pub fn add_evidence(&self, evidence: Evidence) {
        self.evidence.lock().unwrap().push(evidence);
    }

    pub fn add_verification(&self, record: VerificationRecord) {
        self.verifications.lock().unwrap().push(record);
    }

    pub fn add_membership(&self, membership: TeamMembership) {
        self.memberships.lock().unwrap().push(membership);
    }

    pub fn add_activity(&self, event: ActivityEvent) {
        self.activity.lock().unwrap().push(event);
    }

    pub fn add_invitation(&self, invitation: Invitation) {
        self.invitations.lock().unwrap().push(invitation);
    }

    pub fn add_project(&self, project: Project) {
        self.projects.lock().unwrap().push(project);
    }
}

impl IBuilderRepository for InMemoryStore {
    fn get(&self, id: &str) -> ForgeResult<Option<Builder>> {
        self.guard()?;
        Ok(self
            .builders
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    fn matching_pool(&self, exclude_builder: &str) -> ForgeResult<Vec<Builder>> {
        self.guard()?;
        Ok(self
            .builders
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.id != exclude_builder)
            .cloned()
            .collect())
    }

    fn by_role(&self, role: &str) -> ForgeResult<Vec<Builder>> {
        self.guard()?;
        Ok(self
            .builders
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.roles.iter().any(|r| r == role))
            .cloned()
            .collect())
    }

    fn update_skills(&self, id: &str, skills: SkillSet, confidence: u8) -> ForgeResult<()> {
        let mut builders = self.builders.lock().unwrap();
        let builder = builders
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| RepositoryError::not_found("builder", id))?;
        builder.skills = skills;
        builder.confidence_score = confidence;
        Ok(())
    }
}

impl IDeliveryRepository for InMemoryStore {
    fn get(&self, id: &str) -> ForgeResult<Option<Delivery>> {
        self.guard()?;
        Ok(self
            .deliveries
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    fn for_builder(&self, builder_id: &str) -> ForgeResult<Vec<Delivery>> {
        self.guard()?;
        Ok(self
            .deliveries
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.builder_id == builder_id)
            .cloned()
            .collect())
    }

    fn set_status(&self, id: &str, status: DeliveryStatus) -> ForgeResult<()> {
        let mut deliveries = self.deliveries.lock().unwrap();
        let delivery = deliveries
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| RepositoryError::not_found("delivery", id))?;
        delivery.status = status;
        Ok(())
    }
}

impl IEvidenceRepository for InMemoryStore {
    fn for_delivery(&self, delivery_id: &str) -> ForgeResult<Vec<Evidence>> {
        self.guard()?;
        Ok(self
            .evidence
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.delivery_id == delivery_id)
            .cloned()
            .collect())
    }
}

impl IVerificationRepository for InMemoryStore {
    fn for_delivery(&self, delivery_id: &str) -> ForgeResult<Option<VerificationRecord>> {
        self.guard()?;
        Ok(self
            .verifications
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.delivery_id == delivery_id)
            .cloned())
    }

    fn upsert(&self, record: &VerificationRecord) -> ForgeResult<()> {
        let mut verifications = self.verifications.lock().unwrap();
        match verifications
            .iter_mut()
            .find(|v| v.delivery_id == record.delivery_id)
        {
            Some(existing) => *existing = record.clone(),
            None => verifications.push(record.clone()),
        }
        Ok(())
    }
}

impl IMembershipRepository for InMemoryStore {
    fn for_builder(&self, builder_id: &str) -> ForgeResult<Vec<TeamMembership>> {
        self.guard()?;
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.builder_id == builder_id)
            .cloned()
            .collect())
    }

    fn distinct_collaborators(&self, builder_id: &str) -> ForgeResult<Vec<String>> {
        self.guard()?;
        let memberships = self.memberships.lock().unwrap();
        let own_projects: HashSet<&str> = memberships
            .iter()
            .filter(|m| m.builder_id == builder_id)
            .map(|m| m.project_id.as_str())
            .collect();

        let mut collaborators: Vec<String> = Vec::new();
        for m in memberships.iter() {
            if m.builder_id != builder_id
                && own_projects.contains(m.project_id.as_str())
                && !collaborators.contains(&m.builder_id)
            {
                collaborators.push(m.builder_id.clone());
            }
        }
        Ok(collaborators)
    }
}

impl IActivityRepository for InMemoryStore {
    fn for_builder_since(
        &self,
        builder_id: &str,
        since: DateTime<Utc>,
    ) -> ForgeResult<Vec<ActivityEvent>> {
        self.guard()?;
        Ok(self
            .activity
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.builder_id == builder_id && e.occurred_at >= since)
            .cloned()
            .collect())
    }
}

impl IInvitationRepository for InMemoryStore {
    fn history_for(&self, builder_id: &str, now: DateTime<Utc>) -> ForgeResult<InviteHistory> {
        self.guard()?;
        let invitations = self.invitations.lock().unwrap();
        let mut history = InviteHistory::default();
        for inv in invitations.iter().filter(|i| i.builder_id == builder_id) {
            history.received += 1;
            match inv.status {
                InvitationStatus::Accepted => history.accepted += 1,
                InvitationStatus::Declined => history.declined += 1,
                _ => {}
            }
            if inv.sent_at >= now - Duration::days(7) {
                history.recent_7d += 1;
            }
        }
        Ok(history)
    }
}

impl IProjectRepository for InMemoryStore {
    fn get(&self, id: &str) -> ForgeResult<Option<Project>> {
        self.guard()?;
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
}

impl IScoreRepository for InMemoryStore {
    fn get(&self, builder_id: &str) -> ForgeResult<Option<ForgeScoreRecord>> {
        self.guard()?;
        Ok(self
            .scores
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.builder_id == builder_id)
            .cloned())
    }

    fn upsert(&self, record: &ForgeScoreRecord) -> ForgeResult<()> {
        let mut scores = self.scores.lock().unwrap();
        match scores.iter_mut().find(|s| s.builder_id == record.builder_id) {
            Some(existing) => *existing = record.clone(),
            None => scores.push(record.clone()),
        }
        Ok(())
    }
}
