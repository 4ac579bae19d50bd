use crate::models::{ScoreInputs, ScoreOutcome, ScoreStrategyKind};

/// A named forge-score strategy. Pure: same inputs, same outcome, no I/O.
///
/// Two implementations exist: the canonical evidence-based model and the
/// coarse legacy model kept as a fallback. The fallback must never
/// overwrite a persisted evidence-strategy result; that guard lives in the
/// score pipeline, not here.
pub trait IScoringStrategy: Send + Sync {
    fn kind(&self) -> ScoreStrategyKind;
    fn compute(&self, inputs: &ScoreInputs) -> ScoreOutcome;
}
