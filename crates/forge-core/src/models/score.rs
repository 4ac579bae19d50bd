use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which scoring strategy produced a persisted score.
///
/// `Evidence` is canonical; `Legacy` is the coarse four-input fallback and
/// must never overwrite an evidence-strategy row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStrategyKind {
    Evidence,
    Legacy,
}

/// Pure output of one score computation, components unrounded for
/// observability. Persisted via [`ScoreOutcome::into_record`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    /// Raw weighted score, rounded and clamped to 0–1000.
    pub score: u32,
    pub delivery_success: f64,
    pub reliability: f64,
    pub delivery_quality: f64,
    pub consistency: f64,
    pub confidence: u8,
    pub effective_score: u32,
    pub strategy: ScoreStrategyKind,
}

impl ScoreOutcome {
    /// Round the outcome into the persisted row shape.
    pub fn into_record(self, builder_id: &str, computed_at: DateTime<Utc>) -> ForgeScoreRecord {
        ForgeScoreRecord {
            builder_id: builder_id.to_string(),
            score: self.score,
            delivery_success_component: self.delivery_success.round() as u32,
            reliability_component: self.reliability.round() as u32,
            delivery_quality_component: self.delivery_quality.round() as u32,
            consistency_component: self.consistency.round() as u32,
            confidence: self.confidence,
            effective_score: self.effective_score,
            strategy: self.strategy,
            computed_at,
        }
    }
}

/// One row per builder holding the latest forge score computation.
/// Overwritten wholesale on each recompute; history lives elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForgeScoreRecord {
    pub builder_id: String,
    /// Raw weighted score, 0–1000.
    pub score: u32,
    pub delivery_success_component: u32,
    pub reliability_component: u32,
    pub delivery_quality_component: u32,
    pub consistency_component: u32,
    /// 0–100.
    pub confidence: u8,
    /// Confidence-damped score actually surfaced to users.
    pub effective_score: u32,
    pub strategy: ScoreStrategyKind,
    pub computed_at: DateTime<Utc>,
}
