use forge_core::models::ReliabilityCounts;

/// Neutral prior completion rate the shrinkage estimator regresses toward.
const NEUTRAL_PRIOR: f64 = 0.5;
/// Prior strength in pseudo-deliveries. One real delivery moves the
/// estimate only a fifth of the way from the prior.
const PRIOR_STRENGTH: f64 = 4.0;
/// Penalty per dropped delivery.
const DROPPED_PENALTY: f64 = 50.0;
/// Penalty per abandoned project membership. Walking away from a team
/// weighs heavier than an ordinary non-completion.
const ABANDONED_PENALTY: f64 = 100.0;

/// Reliability component from completion rate and penalties.
///
/// Zero deliveries is a valid "no evidence yet" state and scores 0 exactly.
/// The completion rate is shrunk toward a neutral 0.5 prior so one delivery
/// cannot swing the component to 0 or 1000 on its own.
pub fn calculate(counts: &ReliabilityCounts) -> f64 {
    if counts.total_deliveries == 0 {
        return 0.0;
    }

    let total = counts.total_deliveries as f64;
    let completed = counts.completed_deliveries as f64;
    let shrunk_rate = (completed + PRIOR_STRENGTH * NEUTRAL_PRIOR) / (total + PRIOR_STRENGTH);

    let penalty = counts.dropped_deliveries as f64 * DROPPED_PENALTY
        + counts.projects_abandoned as f64 * ABANDONED_PENALTY
        + counts.projects_no_show as f64 * ABANDONED_PENALTY;

    (shrunk_rate * 1000.0 - penalty).clamp(0.0, 1000.0)
}

/// Legacy reliability: raw completion rate, dropped-count subtraction, no
/// shrinkage and no abandonment signal.
pub fn calculate_legacy(total: u32, completed: u32, dropped: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = completed as f64 / total as f64;
    (rate * 1000.0 - dropped as f64 * DROPPED_PENALTY).clamp(0.0, 1000.0)
}
