use forge_core::models::{Evidence, EvidenceType};

/// Collaborator check. Only assessed when an attestation was submitted;
/// passes when any attestation is verified.
pub fn check(evidence: &[Evidence]) -> Option<bool> {
    let mut any_typed = false;
    let mut any_verified = false;
    for e in evidence {
        if e.evidence_type == EvidenceType::CollaboratorAttestation {
            any_typed = true;
            any_verified |= e.verified;
        }
    }

    if !any_typed {
        return None;
    }
    Some(any_verified)
}
