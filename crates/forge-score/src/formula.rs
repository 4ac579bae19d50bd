use forge_core::constants::{
    EFFECTIVE_SCORE_FLOOR, WEIGHT_CONSISTENCY, WEIGHT_DELIVERY_QUALITY, WEIGHT_DELIVERY_SUCCESS,
    WEIGHT_RELIABILITY,
};
use forge_core::models::{ScoreInputs, ScoreOutcome, ScoreStrategyKind};

use crate::components;
use crate::confidence;

/// Four-dimension weighted score.
///
/// ```text
/// score = round( 0.45 × deliverySuccess
///              + 0.30 × reliability
///              + 0.15 × deliveryQuality
///              + 0.10 × consistency )
/// ```
///
/// Each component and the final score are clamped to [0, 1000].
pub fn compute(inputs: &ScoreInputs) -> ScoreOutcome {
    let delivery_success = components::delivery_success::calculate(&inputs.delivery);
    let reliability = components::reliability::calculate(&inputs.reliability);
    let delivery_quality = components::quality::calculate(&inputs.quality);
    let consistency = components::consistency::calculate(&inputs.consistency);

    let score = combine(delivery_success, reliability, delivery_quality, consistency);

    let confidence = confidence::calculate(
        inputs.confidence.verified_deliveries,
        inputs.confidence.distinct_collaborators,
        inputs.confidence.outcomes,
    );

    ScoreOutcome {
        score,
        delivery_success,
        reliability,
        delivery_quality,
        consistency,
        confidence,
        effective_score: effective_score(score, confidence),
        strategy: ScoreStrategyKind::Evidence,
    }
}

/// Weighted sum, rounded and clamped to [0, 1000].
pub fn combine(
    delivery_success: f64,
    reliability: f64,
    delivery_quality: f64,
    consistency: f64,
) -> u32 {
    let weighted = WEIGHT_DELIVERY_SUCCESS * delivery_success
        + WEIGHT_RELIABILITY * reliability
        + WEIGHT_DELIVERY_QUALITY * delivery_quality
        + WEIGHT_CONSISTENCY * consistency;

    weighted.round().clamp(0.0, 1000.0) as u32
}

/// Confidence-damped score: `round(score × (0.6 + 0.4 × confidence/100))`.
/// A zero-confidence builder surfaces at 60% of the raw value; full
/// confidence leaves it undamped.
pub fn effective_score(score: u32, confidence: u8) -> u32 {
    let damp = EFFECTIVE_SCORE_FLOOR + (1.0 - EFFECTIVE_SCORE_FLOOR) * confidence as f64 / 100.0;
    (score as f64 * damp).round() as u32
}
