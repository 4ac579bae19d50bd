use forge_core::models::{Evidence, EvidenceType};

/// Deployment check. Not assessed (None) unless a deployment URL was
/// submitted or deployment-type evidence exists. Passes when any
/// deployment evidence is verified.
pub fn check(evidence: &[Evidence], deployment_url: Option<&str>) -> Option<bool> {
    let mut any_typed = false;
    let mut any_verified = false;
    for e in evidence {
        if e.evidence_type == EvidenceType::DeploymentUrl {
            any_typed = true;
            any_verified |= e.verified;
        }
    }

    if deployment_url.is_none() && !any_typed {
        return None;
    }
    Some(any_verified)
}
