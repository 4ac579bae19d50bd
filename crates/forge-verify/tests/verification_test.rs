use chrono::{Duration, Utc};
use forge_core::models::{EvidenceType, OverallStatus};
use forge_verify::{verify, VerificationInput};
use test_fixtures::make_evidence;

fn empty_input() -> VerificationInput<'static> {
    VerificationInput {
        evidence: &[],
        deployment_url: None,
        repo_url: None,
        started_at: None,
        completed_at: None,
    }
}

// ── Overall-status classification ────────────────────────────────────────

#[test]
fn no_evidence_no_urls_is_pending() {
    let outcome = verify(empty_input());
    assert_eq!(outcome.overall_status, OverallStatus::Pending);
    assert_eq!(outcome.deployment_reachable, None);
    assert_eq!(outcome.repo_exists, None);
    assert_eq!(outcome.timeline_verified, None);
    assert_eq!(outcome.collaborator_confirmed, None);
}

#[test]
fn single_passed_check_is_verified() {
    let evidence = vec![make_evidence("d1", EvidenceType::DeploymentUrl, true)];
    let outcome = verify(VerificationInput {
        evidence: &evidence,
        deployment_url: Some("https://app.example.com"),
        ..empty_input()
    });
    assert_eq!(outcome.deployment_reachable, Some(true));
    assert_eq!(outcome.repo_exists, None);
    assert_eq!(outcome.overall_status, OverallStatus::Verified);
}

#[test]
fn mixed_pass_and_fail_is_partial() {
    // Deployment verified; repo URL submitted but its evidence unverified.
    let evidence = vec![
        make_evidence("d1", EvidenceType::DeploymentUrl, true),
        make_evidence("d1", EvidenceType::RepoUrl, false),
    ];
    let outcome = verify(VerificationInput {
        evidence: &evidence,
        deployment_url: Some("https://app.example.com"),
        repo_url: Some("https://github.com/x/y"),
        ..empty_input()
    });
    assert_eq!(outcome.deployment_reachable, Some(true));
    assert_eq!(outcome.repo_exists, Some(false));
    assert_eq!(outcome.overall_status, OverallStatus::Partial);
}

#[test]
fn all_assessed_failing_is_failed() {
    let evidence = vec![make_evidence("d1", EvidenceType::DeploymentUrl, false)];
    let outcome = verify(VerificationInput {
        evidence: &evidence,
        deployment_url: Some("https://app.example.com"),
        ..empty_input()
    });
    assert_eq!(outcome.deployment_reachable, Some(false));
    assert_eq!(outcome.overall_status, OverallStatus::Failed);
}

#[test]
fn url_without_evidence_is_assessed_and_fails() {
    // A claimed deployment with nothing verified behind it is a failure,
    // not an unassessed check.
    let outcome = verify(VerificationInput {
        deployment_url: Some("https://app.example.com"),
        ..empty_input()
    });
    assert_eq!(outcome.deployment_reachable, Some(false));
    assert_eq!(outcome.overall_status, OverallStatus::Failed);
}

#[test]
fn unrelated_evidence_does_not_assess_other_checks() {
    let evidence = vec![make_evidence("d1", EvidenceType::CollaboratorAttestation, true)];
    let outcome = verify(VerificationInput {
        evidence: &evidence,
        ..empty_input()
    });
    assert_eq!(outcome.collaborator_confirmed, Some(true));
    assert_eq!(outcome.deployment_reachable, None);
    assert_eq!(outcome.repo_exists, None);
    assert_eq!(outcome.timeline_verified, None);
    assert_eq!(outcome.overall_status, OverallStatus::Verified);
}

// ── Timeline boundaries ──────────────────────────────────────────────────

#[test]
fn timeline_inside_window_passes() {
    let now = Utc::now();
    let evidence = vec![make_evidence("d1", EvidenceType::TimelineProof, true)];
    let outcome = verify(VerificationInput {
        evidence: &evidence,
        started_at: Some(now - Duration::days(364)),
        completed_at: Some(now),
        ..empty_input()
    });
    assert_eq!(outcome.timeline_verified, Some(true));
}

#[test]
fn timeline_at_or_beyond_one_year_is_not_satisfied() {
    let now = Utc::now();
    let evidence = vec![make_evidence("d1", EvidenceType::TimelineProof, true)];
    for days in [365, 366, 1000] {
        let outcome = verify(VerificationInput {
            evidence: &evidence,
            started_at: Some(now - Duration::days(days)),
            completed_at: Some(now),
            ..empty_input()
        });
        assert_eq!(outcome.timeline_verified, Some(false), "{days} days");
    }
}

#[test]
fn timeline_zero_or_negative_duration_is_not_satisfied() {
    let now = Utc::now();
    let evidence = vec![make_evidence("d1", EvidenceType::TimelineProof, true)];

    let zero = verify(VerificationInput {
        evidence: &evidence,
        started_at: Some(now),
        completed_at: Some(now),
        ..empty_input()
    });
    assert_eq!(zero.timeline_verified, Some(false));

    let backwards = verify(VerificationInput {
        evidence: &evidence,
        started_at: Some(now),
        completed_at: Some(now - Duration::days(10)),
        ..empty_input()
    });
    assert_eq!(backwards.timeline_verified, Some(false));
}

#[test]
fn timeline_without_timestamps_is_not_assessed() {
    let evidence = vec![make_evidence("d1", EvidenceType::TimelineProof, true)];
    let outcome = verify(VerificationInput {
        evidence: &evidence,
        started_at: None,
        completed_at: None,
        ..empty_input()
    });
    assert_eq!(outcome.timeline_verified, None);
    assert_eq!(outcome.overall_status, OverallStatus::Pending);
}
