use chrono::{DateTime, Utc};

use forge_core::models::{
    Delivery, Evidence, EvidenceType, QualityRecord, VerificationRecord, VerificationSignals,
};

use crate::delivery_stats::is_sustained;
use crate::depth::DepthClassifier;
use crate::ownership;

/// Build the quality record for one verified delivery.
pub fn build_record(
    delivery: &Delivery,
    verification: Option<&VerificationRecord>,
    evidence: &[Evidence],
    classifier: &DepthClassifier,
    now: DateTime<Utc>,
) -> QualityRecord {
    QualityRecord {
        signals: signals(verification, evidence),
        depth: classifier.classify(&delivery.stack, &delivery.title),
        sustained_90_days: is_sustained(delivery, now),
        ownership: ownership::derive(delivery),
        update_windows: update_windows(delivery),
    }
}

/// Tri-state signals: four from the verification snapshot, contribution
/// evidence judged directly from screenshot/custom evidence rows.
fn signals(
    verification: Option<&VerificationRecord>,
    evidence: &[Evidence],
) -> VerificationSignals {
    let contribution: Vec<&Evidence> = evidence
        .iter()
        .filter(|e| {
            matches!(
                e.evidence_type,
                EvidenceType::Screenshot | EvidenceType::Custom
            )
        })
        .collect();
    let contribution_evidence = if contribution.is_empty() {
        None
    } else {
        Some(contribution.iter().any(|e| e.verified))
    };

    VerificationSignals {
        deployment_reachable: verification.and_then(|v| v.deployment_reachable),
        repo_exists: verification.and_then(|v| v.repo_exists),
        contribution_evidence,
        timeline_evidence: verification.and_then(|v| v.timeline_verified),
        collaborator_attested: verification.and_then(|v| v.collaborator_confirmed),
    }
}

/// Days between creation and last update, floor-divided into windows.
/// At least 1 once any update occurred, capped at 30. No update: 0.
fn update_windows(delivery: &Delivery) -> u32 {
    match delivery.updated_at {
        None => 0,
        Some(updated) => {
            let days = (updated - delivery.created_at).num_days().max(0) as u32;
            days.clamp(1, 30)
        }
    }
}
