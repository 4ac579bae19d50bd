//! Builder–project compatibility: four fit facets blended into a 0–100
//! percentage.

use forge_core::models::{Availability, Builder, CompatibilityBreakdown, Project};

const WEIGHT_CAPABILITY: f64 = 0.40;
const WEIGHT_RELIABILITY: f64 = 0.25;
const WEIGHT_COMMITMENT: f64 = 0.20;
const WEIGHT_HISTORY: f64 = 0.15;

/// Neutral fit when a facet has nothing to compare against.
const NEUTRAL_FIT: f64 = 0.5;

/// Delivery history the engine pre-aggregates for one candidate.
#[derive(Debug, Clone, Default)]
pub struct BuilderHistory {
    pub verified_deliveries: u32,
    /// Lowercased stack tags across the builder's deliveries.
    pub stack_tags: Vec<String>,
}

/// Compute the compatibility percentage and its facet breakdown.
pub fn compatibility(
    project: &Project,
    builder: &Builder,
    history: &BuilderHistory,
) -> CompatibilityBreakdown {
    let capability = capability_fit(project, builder);
    let reliability = builder.reliability_score as f64 / 100.0;
    let commitment = commitment_fit(project, builder);
    let delivery_history = history_fit(project, history);

    let blended = WEIGHT_CAPABILITY * capability
        + WEIGHT_RELIABILITY * reliability
        + WEIGHT_COMMITMENT * commitment
        + WEIGHT_HISTORY * delivery_history;

    CompatibilityBreakdown {
        score_percent: to_percent(blended),
        capability_fit: to_percent(capability),
        reliability_fit: to_percent(reliability),
        commitment_fit: to_percent(commitment),
        delivery_history_fit: to_percent(delivery_history),
    }
}

fn to_percent(fit: f64) -> u8 {
    (fit * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Skill and role overlap. Adding overlap can only raise the facet.
fn capability_fit(project: &Project, builder: &Builder) -> f64 {
    let skill = if project.required_skills.is_empty() {
        None
    } else {
        let sum: f64 = project
            .required_skills
            .iter()
            .map(|s| {
                let name = s.to_lowercase();
                if let Some(level) = builder.skills.dimension(&name) {
                    level as f64 / 100.0
                } else if builder.roles.iter().any(|r| r == &name) {
                    // A matching role with no scored dimension is partial credit.
                    0.75
                } else {
                    0.0
                }
            })
            .sum();
        Some(sum / project.required_skills.len() as f64)
    };

    let role = if project.roles_needed.is_empty() {
        None
    } else {
        let hits = project
            .roles_needed
            .iter()
            .filter(|needed| {
                let needed = needed.to_lowercase();
                builder.roles.iter().any(|r| r == &needed)
            })
            .count();
        Some(hits as f64 / project.roles_needed.len() as f64)
    };

    match (skill, role) {
        (Some(s), Some(r)) => 0.7 * s + 0.3 * r,
        (Some(s), None) => s,
        (None, Some(r)) => r,
        (None, None) => NEUTRAL_FIT,
    }
}

/// Hours-range fit scaled by availability and team-size alignment. A
/// builder entirely outside the project's hours window always scores below
/// one fully inside it.
fn commitment_fit(project: &Project, builder: &Builder) -> f64 {
    let hours = match builder.hours_per_week {
        None => 0.6,
        Some(h) => hours_fit(h, project.hours_per_week_min, project.hours_per_week_max),
    };

    let availability = match builder.availability {
        Availability::Available => 1.0,
        Availability::OpenToOpportunities => 0.85,
        Availability::Busy => 0.5,
        Availability::Unavailable => 0.2,
    };

    hours * availability * team_size_alignment(project, builder)
}

/// Mild multiplier for the gap between the builder's preferred team size
/// and the project's target. No stated preference is no penalty.
fn team_size_alignment(project: &Project, builder: &Builder) -> f64 {
    let Some(preferred) = builder.preferred_team_size else {
        return 1.0;
    };
    if project.team_size_target == 0 {
        return 1.0;
    }
    let gap = preferred.abs_diff(project.team_size_target);
    match gap {
        0 | 1 => 1.0,
        2 => 0.9,
        3 => 0.8,
        _ => 0.7,
    }
}

fn hours_fit(hours: u32, min: u32, max: u32) -> f64 {
    if min == 0 && max == 0 {
        // Project didn't state an hours window.
        return 0.8;
    }
    let max = max.max(min);
    if (min..=max).contains(&hours) {
        1.0
    } else if hours < min {
        hours as f64 / min as f64
    } else {
        max as f64 / hours as f64
    }
}

/// Verified-delivery volume plus tag overlap with the project's domain.
fn history_fit(project: &Project, history: &BuilderHistory) -> f64 {
    let volume = (history.verified_deliveries as f64 / 5.0).min(1.0);

    let mut wanted: Vec<String> = project.tags.iter().map(|t| t.to_lowercase()).collect();
    wanted.push(project.category.to_lowercase());

    let overlap = if wanted.is_empty() || history.stack_tags.is_empty() {
        NEUTRAL_FIT * 0.4
    } else {
        let hits = wanted
            .iter()
            .filter(|w| history.stack_tags.iter().any(|t| t == *w))
            .count();
        hits as f64 / wanted.len() as f64
    };

    (volume * 0.6 + overlap * 0.4).clamp(0.0, 1.0)
}
