use forge_core::models::{Evidence, EvidenceType};

/// Repository check, same contract as the deployment check: None unless a
/// repo URL or repo-type evidence exists, pass on any verified evidence.
pub fn check(evidence: &[Evidence], repo_url: Option<&str>) -> Option<bool> {
    let mut any_typed = false;
    let mut any_verified = false;
    for e in evidence {
        if e.evidence_type == EvidenceType::RepoUrl {
            any_typed = true;
            any_verified |= e.verified;
        }
    }

    if repo_url.is_none() && !any_typed {
        return None;
    }
    Some(any_verified)
}
