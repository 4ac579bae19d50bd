//! Acceptance-likelihood estimator: additive base-50 model, clamped to
//! [5, 95]: never certain either way.

use forge_core::models::{
    AcceptanceConfidence, AcceptanceEstimate, Availability, InviteHistory, Project,
};

/// Owner forge score at which a project counts as highly credible.
const HIGH_CREDIBILITY_SCORE: u32 = 600;
const MODERATE_CREDIBILITY_SCORE: u32 = 400;

/// Historical acceptance rate that earns a reason string.
const HIGH_ACCEPT_RATE: f64 = 0.7;

/// Estimate the probability (as a percentage) that `builder` accepts an
/// invitation to `project`.
///
/// Each term's magnitude and direction is part of the model's contract:
/// availability ±, owner credibility +, stage traction +, skill match ±,
/// historical response rate ±, recent-invite spam −.
pub fn estimate(
    availability: Availability,
    project: &Project,
    owner_forge_score: u32,
    history: &InviteHistory,
    compatibility_percent: u8,
) -> AcceptanceEstimate {
    let mut base: i32 = 50;
    let mut reasons: Vec<String> = Vec::new();

    // Availability.
    match availability {
        Availability::Available => {
            base += 20;
            reasons.push("Currently available for new work".to_string());
        }
        Availability::OpenToOpportunities => {
            base += 10;
            reasons.push("Open to new opportunities".to_string());
        }
        Availability::Busy => base -= 15,
        Availability::Unavailable => base -= 30,
    }

    // Project attractiveness.
    if owner_forge_score >= HIGH_CREDIBILITY_SCORE {
        base += 8;
        reasons.push("Invited by a highly credible project owner".to_string());
    } else if owner_forge_score >= MODERATE_CREDIBILITY_SCORE {
        base += 4;
    }
    if project.stage.has_traction() {
        base += 5;
    }

    // Skill match.
    if compatibility_percent >= 70 {
        base += 10;
        reasons.push("Strong skill alignment with the project".to_string());
    } else if compatibility_percent >= 50 {
        base += 5;
    } else {
        base -= 5;
    }

    // Historical acceptance rate, centered on 0.5.
    let responses = history.responses();
    if responses > 0 {
        let accept_rate = history.accepted as f64 / responses as f64;
        base += ((accept_rate - 0.5) * 20.0).round() as i32;
        if accept_rate >= HIGH_ACCEPT_RATE {
            reasons.push("Accepts most invitations they receive".to_string());
        }
    }

    // Invite-spam penalty.
    if history.recent_7d > 5 {
        base -= 10;
    } else if history.recent_7d > 2 {
        base -= 5;
    }

    let percent = base.clamp(5, 95) as u8;

    let confidence = if history.received >= 5 && responses >= 3 {
        AcceptanceConfidence::High
    } else if history.received >= 2 {
        AcceptanceConfidence::Medium
    } else {
        AcceptanceConfidence::Low
    };

    reasons.truncate(3);
    if reasons.is_empty() {
        reasons.push("Based on availability and project fit".to_string());
    }

    AcceptanceEstimate {
        percent,
        confidence,
        reasons,
    }
}
