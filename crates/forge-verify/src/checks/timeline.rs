use chrono::{DateTime, Utc};

use forge_core::constants::TIMELINE_MAX_DAYS;
use forge_core::models::{Evidence, EvidenceType};

/// Timeline check. Requires timeline-proof evidence AND both timestamps;
/// without either there is nothing to judge and the check stays None.
///
/// The claimed duration must satisfy `0 < duration_days < 365`. The
/// one-year ceiling is a fixed design constant, not a per-call knob: a
/// "delivery" that ran for years is a project, and the proof no longer
/// says anything about execution pace.
pub fn check(
    evidence: &[Evidence],
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
) -> Option<bool> {
    let proofs: Vec<&Evidence> = evidence
        .iter()
        .filter(|e| e.evidence_type == EvidenceType::TimelineProof)
        .collect();
    if proofs.is_empty() {
        return None;
    }

    let (started, completed) = match (started_at, completed_at) {
        (Some(s), Some(c)) => (s, c),
        _ => return None,
    };

    let duration_days = (completed - started).num_days();
    if duration_days <= 0 || duration_days >= TIMELINE_MAX_DAYS {
        return Some(false);
    }

    Some(proofs.iter().any(|e| e.verified))
}
