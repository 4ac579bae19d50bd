//! Ownership heuristics. A submitted URL is taken as a weak proxy for
//! operating the thing behind it. Acknowledged as a heuristic, not a true
//! ownership check. Isolated here so a real attestation source can replace
//! it without touching delivery-quality scoring.

use forge_core::models::{Delivery, OwnershipSignals};

/// Derive ownership signals from URL presence. A missing URL gives `None`
/// (no evidence either way), never `Some(false)`.
pub fn derive(delivery: &Delivery) -> OwnershipSignals {
    OwnershipSignals {
        deployment_owner: delivery.deployment_url.as_ref().map(|_| true),
        domain_owner: delivery.deployment_url.as_ref().map(|_| true),
        primary_operator: delivery.repo_url.as_ref().map(|_| true),
    }
}
