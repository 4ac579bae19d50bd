//! Legacy four-input scoring model, kept as a fallback for builders with
//! no structured evidence. Deprecated in favor of the evidence model; the
//! score pipeline refuses to let its output overwrite an evidence result.
//!
//! Dimension names differ from the canonical model: the 15% slot is
//! "collaboration" (team activity) rather than delivery quality.

use forge_core::models::{LegacyInputs, ScoreOutcome, ScoreStrategyKind};

use crate::components::{consistency, delivery_success, reliability};
use crate::confidence;
use crate::formula;

/// Compute the legacy score from the four coarse inputs.
pub fn compute(inputs: &LegacyInputs) -> ScoreOutcome {
    let delivery = forge_core::models::DeliveryStats {
        verified: inputs.verified_deliveries,
        sustained: 0,
        team_completed: 0,
    };
    let success = delivery_success::calculate(&delivery);

    let rel = reliability::calculate_legacy(
        inputs.total_deliveries,
        inputs.completed_deliveries,
        inputs.dropped_deliveries,
    );

    let collab = collaboration(inputs);

    let cons = consistency::calculate_legacy(
        inputs.active_months,
        inputs.consecutive_active_months,
    );

    let score = formula::combine(success, rel, collab, cons);

    let conf = confidence::calculate(
        inputs.total_deliveries,
        inputs.total_teams,
        inputs.active_months,
    );

    ScoreOutcome {
        score,
        delivery_success: success,
        reliability: rel,
        delivery_quality: collab,
        consistency: cons,
        confidence: conf,
        effective_score: formula::effective_score(score, conf),
        strategy: ScoreStrategyKind::Legacy,
    }
}

/// Collaboration: share of deliveries made under a team, plus a capped
/// per-team bonus.
fn collaboration(inputs: &LegacyInputs) -> f64 {
    if inputs.total_deliveries == 0 {
        return 0.0;
    }
    let team_ratio = inputs.team_deliveries as f64 / inputs.total_deliveries as f64;
    (team_ratio * 600.0 + inputs.total_teams.min(5) as f64 * 80.0).clamp(0.0, 1000.0)
}
