//! Constructor helpers for model rows. Every helper fills sane defaults
//! and tests override the fields they care about.

use chrono::{DateTime, Duration, Utc};

use forge_core::models::{
    ActivityEvent, Availability, Builder, Delivery, DeliveryStatus, Evidence, EvidenceType,
    Invitation, InvitationStatus, Project, ProjectStage, ProjectStatus, SkillSet, TeamMembership,
};

pub fn make_builder(id: &str) -> Builder {
    Builder {
        id: id.to_string(),
        username: format!("builder-{id}"),
        availability: Availability::Available,
        forge_score: 0,
        confidence_score: 0,
        reliability_score: 50,
        skills: SkillSet::default(),
        roles: vec![],
        hours_per_week: Some(20),
        preferred_team_size: None,
        created_at: Utc::now() - Duration::days(365),
    }
}

pub fn make_delivery(builder_id: &str, status: DeliveryStatus) -> Delivery {
    let now = Utc::now();
    Delivery {
        id: uuid::Uuid::new_v4().to_string(),
        builder_id: builder_id.to_string(),
        title: "Side project".to_string(),
        status,
        started_at: Some(now - Duration::days(30)),
        completed_at: Some(now - Duration::days(2)),
        deployment_url: None,
        repo_url: None,
        stack: vec![],
        project_id: None,
        created_at: now - Duration::days(30),
        updated_at: None,
    }
}

pub fn make_evidence(delivery_id: &str, evidence_type: EvidenceType, verified: bool) -> Evidence {
    Evidence {
        id: uuid::Uuid::new_v4().to_string(),
        delivery_id: delivery_id.to_string(),
        evidence_type,
        verified,
        created_at: Utc::now(),
    }
}

pub fn make_project(id: &str, owner_id: &str) -> Project {
    Project {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        name: format!("project-{id}"),
        required_skills: vec![],
        roles_needed: vec![],
        tags: vec![],
        hours_per_week_min: 10,
        hours_per_week_max: 30,
        team_size_target: 3,
        timeline_weeks: 12,
        category: "saas".to_string(),
        stage: ProjectStage::Idea,
        status: ProjectStatus::Open,
        created_at: Utc::now() - Duration::days(14),
    }
}

pub fn make_membership(
    builder_id: &str,
    project_id: &str,
    project_status: ProjectStatus,
) -> TeamMembership {
    TeamMembership {
        builder_id: builder_id.to_string(),
        project_id: project_id.to_string(),
        project_status,
        joined_at: Utc::now() - Duration::days(120),
        left_at: None,
    }
}

pub fn make_activity(builder_id: &str, occurred_at: DateTime<Utc>) -> ActivityEvent {
    ActivityEvent {
        builder_id: builder_id.to_string(),
        occurred_at,
        kind: "delivery_update".to_string(),
    }
}

pub fn make_invitation(
    builder_id: &str,
    project_id: &str,
    status: InvitationStatus,
    sent_at: DateTime<Utc>,
) -> Invitation {
    Invitation {
        id: uuid::Uuid::new_v4().to_string(),
        project_id: project_id.to_string(),
        sender_id: "sender".to_string(),
        builder_id: builder_id.to_string(),
        status,
        sent_at,
        expires_at: sent_at + Duration::days(7),
    }
}
