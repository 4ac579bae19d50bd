use tracing::info;

use forge_core::errors::{ForgeResult, RepositoryError};
use forge_core::models::{ForgeScoreRecord, ScoreStrategyKind};
use forge_core::traits::{IBuilderRepository, IScoreRepository, IScoringStrategy};
use forge_evidence::{AggregationContext, EvidenceAggregator};

/// One score recompute: aggregate → score → upsert.
///
/// Rate limiting is the external queue's job; this pipeline assumes it is
/// invoked at most once per logical request and relies on last-write-wins
/// upserts for concurrent runs on the same builder.
pub struct ScorePipeline<'a> {
    builders: &'a dyn IBuilderRepository,
    scores: &'a dyn IScoreRepository,
    aggregator: EvidenceAggregator<'a>,
    strategy: &'a dyn IScoringStrategy,
}

impl<'a> ScorePipeline<'a> {
    pub fn new(
        builders: &'a dyn IBuilderRepository,
        scores: &'a dyn IScoreRepository,
        aggregator: EvidenceAggregator<'a>,
        strategy: &'a dyn IScoringStrategy,
    ) -> Self {
        Self {
            builders,
            scores,
            aggregator,
            strategy,
        }
    }

    /// Recompute and persist the builder's forge score.
    ///
    /// An unknown builder is a not-found error, never a zero score. A
    /// legacy-strategy run finding an existing evidence-strategy row
    /// leaves it untouched and returns it unchanged.
    pub fn recompute(
        &self,
        builder_id: &str,
        ctx: &AggregationContext,
    ) -> ForgeResult<ForgeScoreRecord> {
        if self.builders.get(builder_id)?.is_none() {
            return Err(RepositoryError::not_found("builder", builder_id).into());
        }

        if self.strategy.kind() == ScoreStrategyKind::Legacy {
            if let Some(existing) = self.scores.get(builder_id)? {
                if existing.strategy == ScoreStrategyKind::Evidence {
                    info!(
                        builder_id,
                        "legacy recompute skipped: evidence-strategy score present"
                    );
                    return Ok(existing);
                }
            }
        }

        let inputs = self.aggregator.collect(builder_id, ctx)?;
        let outcome = self.strategy.compute(&inputs);
        let record = outcome.into_record(builder_id, ctx.now);

        self.scores.upsert(&record)?;

        info!(
            builder_id,
            score = record.score,
            effective = record.effective_score,
            confidence = record.confidence,
            strategy = ?record.strategy,
            "forge score recomputed"
        );

        Ok(record)
    }
}
