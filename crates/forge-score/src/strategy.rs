use forge_core::models::{LegacyInputs, ScoreInputs, ScoreOutcome, ScoreStrategyKind};
use forge_core::traits::IScoringStrategy;

use crate::{formula, legacy};

/// Canonical evidence-based strategy.
pub struct EvidenceStrategy;

impl IScoringStrategy for EvidenceStrategy {
    fn kind(&self) -> ScoreStrategyKind {
        ScoreStrategyKind::Evidence
    }

    fn compute(&self, inputs: &ScoreInputs) -> ScoreOutcome {
        formula::compute(inputs)
    }
}

/// Fallback strategy: coarsens the rich inputs down to the legacy model's
/// four-input view before scoring.
pub struct LegacyStrategy;

impl IScoringStrategy for LegacyStrategy {
    fn kind(&self) -> ScoreStrategyKind {
        ScoreStrategyKind::Legacy
    }

    fn compute(&self, inputs: &ScoreInputs) -> ScoreOutcome {
        legacy::compute(&LegacyInputs::coarsen(inputs))
    }
}
