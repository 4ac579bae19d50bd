use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use forge_core::errors::ForgeResult;
use forge_core::models::{ConfidenceInputs, DeliveryStatus, ProjectStatus, ScoreInputs};
use forge_core::traits::{
    IActivityRepository, IDeliveryRepository, IEvidenceRepository, IMembershipRepository,
    IVerificationRepository,
};

use crate::depth::DepthClassifier;
use crate::{consistency, delivery_stats, quality, reliability};

/// Wall-clock context for one aggregation run. Time is injected so runs
/// are reproducible in tests.
#[derive(Debug, Clone, Copy)]
pub struct AggregationContext {
    pub now: DateTime<Utc>,
}

impl Default for AggregationContext {
    fn default() -> Self {
        Self { now: Utc::now() }
    }
}

/// Turns a builder's raw rows into the normalized inputs the score engine
/// consumes. Pure transformation of fetched data; upstream read failures
/// propagate to the caller rather than being zero-filled.
pub struct EvidenceAggregator<'a> {
    deliveries: &'a dyn IDeliveryRepository,
    verifications: &'a dyn IVerificationRepository,
    evidence: &'a dyn IEvidenceRepository,
    memberships: &'a dyn IMembershipRepository,
    activity: &'a dyn IActivityRepository,
    classifier: DepthClassifier,
}

impl<'a> EvidenceAggregator<'a> {
    pub fn new(
        deliveries: &'a dyn IDeliveryRepository,
        verifications: &'a dyn IVerificationRepository,
        evidence: &'a dyn IEvidenceRepository,
        memberships: &'a dyn IMembershipRepository,
        activity: &'a dyn IActivityRepository,
    ) -> Self {
        Self {
            deliveries,
            verifications,
            evidence,
            memberships,
            activity,
            classifier: DepthClassifier::new(),
        }
    }

    /// Swap in a custom depth classifier.
    pub fn with_classifier(mut self, classifier: DepthClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Collect and normalize everything the score engine needs.
    pub fn collect(
        &self,
        builder_id: &str,
        ctx: &AggregationContext,
    ) -> ForgeResult<ScoreInputs> {
        // Step 1: Fetch rows.
        let deliveries = self.deliveries.for_builder(builder_id)?;
        let memberships = self.memberships.for_builder(builder_id)?;
        let activity = self
            .activity
            .for_builder_since(builder_id, ctx.now - Duration::days(365))?;
        let collaborators = self.memberships.distinct_collaborators(builder_id)?;

        // Step 2: Parent-project status lookup from the membership join.
        let project_status: HashMap<String, ProjectStatus> = memberships
            .iter()
            .map(|m| (m.project_id.clone(), m.project_status))
            .collect();

        // Step 3: Delivery-success and reliability counts.
        let delivery = delivery_stats::compute(&deliveries, &project_status, ctx.now);
        let reliability = reliability::compute(&deliveries, &memberships);

        // Step 4: One quality record per verified delivery.
        let mut quality_records = Vec::new();
        for d in deliveries
            .iter()
            .filter(|d| d.status == DeliveryStatus::Verified)
        {
            let verification = self.verifications.for_delivery(&d.id)?;
            let evidence = self.evidence.for_delivery(&d.id)?;
            quality_records.push(quality::build_record(
                d,
                verification.as_ref(),
                &evidence,
                &self.classifier,
                ctx.now,
            ));
        }

        // Step 5: Consistency cadence.
        let consistency = consistency::compute(&deliveries, &activity, ctx.now);

        // Step 6: Confidence inputs.
        let confidence = ConfidenceInputs {
            verified_deliveries: delivery.verified,
            sustained_deliveries: delivery.sustained,
            distinct_collaborators: collaborators.len() as u32,
            outcomes: memberships
                .iter()
                .filter(|m| m.project_status.is_outcome())
                .count() as u32,
        };

        debug!(
            builder_id,
            verified = delivery.verified,
            quality_records = quality_records.len(),
            active_weeks = consistency.active_weeks_last_12,
            "aggregated score inputs"
        );

        Ok(ScoreInputs {
            delivery,
            reliability,
            quality: quality_records,
            consistency,
            confidence,
        })
    }
}
