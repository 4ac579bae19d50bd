use chrono::{DateTime, Utc};
use tracing::info;

use forge_core::errors::{ForgeResult, RepositoryError};
use forge_core::models::{DeliveryStatus, OverallStatus, VerificationRecord};
use forge_core::traits::{IDeliveryRepository, IEvidenceRepository, IVerificationRepository};
use forge_verify::{verify, VerificationInput};

/// One verification run over a delivery's evidence, with the caller-side
/// effect the pure engine doesn't have: a fully verified outcome promotes
/// the delivery's own status.
pub struct VerificationPipeline<'a> {
    deliveries: &'a dyn IDeliveryRepository,
    evidence: &'a dyn IEvidenceRepository,
    verifications: &'a dyn IVerificationRepository,
}

impl<'a> VerificationPipeline<'a> {
    pub fn new(
        deliveries: &'a dyn IDeliveryRepository,
        evidence: &'a dyn IEvidenceRepository,
        verifications: &'a dyn IVerificationRepository,
    ) -> Self {
        Self {
            deliveries,
            evidence,
            verifications,
        }
    }

    /// Run the checks and upsert the delivery's verification snapshot.
    pub fn run(&self, delivery_id: &str, now: DateTime<Utc>) -> ForgeResult<VerificationRecord> {
        let delivery = self
            .deliveries
            .get(delivery_id)?
            .ok_or_else(|| RepositoryError::not_found("delivery", delivery_id))?;

        let evidence = self.evidence.for_delivery(delivery_id)?;

        let outcome = verify(VerificationInput {
            evidence: &evidence,
            deployment_url: delivery.deployment_url.as_deref(),
            repo_url: delivery.repo_url.as_deref(),
            started_at: delivery.started_at,
            completed_at: delivery.completed_at,
        });

        let record = VerificationRecord {
            delivery_id: delivery_id.to_string(),
            deployment_reachable: outcome.deployment_reachable,
            repo_exists: outcome.repo_exists,
            timeline_verified: outcome.timeline_verified,
            collaborator_confirmed: outcome.collaborator_confirmed,
            overall_status: outcome.overall_status,
            last_checked_at: now,
        };
        self.verifications.upsert(&record)?;

        if outcome.overall_status == OverallStatus::Verified
            && delivery.status != DeliveryStatus::Verified
        {
            self.deliveries
                .set_status(delivery_id, DeliveryStatus::Verified)?;
            info!(delivery_id, "delivery promoted to verified");
        }

        info!(
            delivery_id,
            status = ?record.overall_status,
            "verification run complete"
        );

        Ok(record)
    }
}
