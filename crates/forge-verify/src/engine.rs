use chrono::{DateTime, Utc};

use forge_core::models::{Evidence, OverallStatus};

use crate::checks;

/// Everything a verification run looks at. All borrowed from already
/// fetched rows; the engine itself performs no I/O.
#[derive(Debug, Clone, Copy)]
pub struct VerificationInput<'a> {
    pub evidence: &'a [Evidence],
    pub deployment_url: Option<&'a str>,
    pub repo_url: Option<&'a str>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Outcome of one run: four tri-state checks plus the overall status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub deployment_reachable: Option<bool>,
    pub repo_exists: Option<bool>,
    pub timeline_verified: Option<bool>,
    pub collaborator_confirmed: Option<bool>,
    pub overall_status: OverallStatus,
}

/// Run the four checks independently and classify the overall status.
///
/// Pure classifier: promoting the delivery on a `Verified` outcome is the
/// caller's side effect, not this engine's.
pub fn verify(input: VerificationInput<'_>) -> VerificationOutcome {
    let deployment_reachable = checks::deployment::check(input.evidence, input.deployment_url);
    let repo_exists = checks::repository::check(input.evidence, input.repo_url);
    let timeline_verified =
        checks::timeline::check(input.evidence, input.started_at, input.completed_at);
    let collaborator_confirmed = checks::collaborator::check(input.evidence);

    let overall_status = classify(&[
        deployment_reachable,
        repo_exists,
        timeline_verified,
        collaborator_confirmed,
    ]);

    VerificationOutcome {
        deployment_reachable,
        repo_exists,
        timeline_verified,
        collaborator_confirmed,
        overall_status,
    }
}

/// Strict 4-way classification. Unassessed (None) checks are excluded:
/// a check with no evidence is not a failure.
fn classify(checks: &[Option<bool>]) -> OverallStatus {
    let assessed = checks.iter().filter(|c| c.is_some()).count();
    let passed = checks.iter().filter(|c| **c == Some(true)).count();

    if assessed == 0 {
        OverallStatus::Pending
    } else if passed == assessed {
        OverallStatus::Verified
    } else if passed > 0 {
        OverallStatus::Partial
    } else {
        OverallStatus::Failed
    }
}
