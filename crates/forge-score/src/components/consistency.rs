use forge_core::constants::CONSISTENCY_RECENCY_CUTOFF_DAYS;
use forge_core::models::ConsistencyInputs;

/// Consistency component from trailing-12-month cadence.
///
/// Activity (active weeks, recent deliveries) builds the raw value; a
/// linear freshness gate multiplies it down to 0 as `recency_days`
/// approaches 180. Past activity cannot carry a builder who went dark.
pub fn calculate(inputs: &ConsistencyInputs) -> f64 {
    let freshness = 1.0 - inputs.recency_days as f64 / CONSISTENCY_RECENCY_CUTOFF_DAYS as f64;
    let freshness = freshness.clamp(0.0, 1.0);
    if freshness == 0.0 {
        return 0.0;
    }

    let weeks = inputs.active_weeks_last_12 as f64;
    let activity = (weeks / 24.0).min(1.0) * 600.0
        + (weeks / 52.0).min(1.0) * 250.0
        + (inputs.deliveries_last_6_months as f64 / 6.0).min(1.0) * 150.0;

    (activity * freshness).clamp(0.0, 1000.0)
}

/// Legacy consistency: `min(months/12, 1) × 600 + min(streak/6, 1) × 400`.
pub fn calculate_legacy(active_months: u32, consecutive_active_months: u32) -> f64 {
    let month_scale = (active_months as f64 / 12.0).min(1.0) * 600.0;
    let streak_bonus = (consecutive_active_months as f64 / 6.0).min(1.0) * 400.0;
    month_scale + streak_bonus
}
