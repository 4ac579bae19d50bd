//! Deterministic candidate ranking and truncation.

use forge_core::models::MatchOutcome;

/// Sort by compatibility descending, tie-break on raw forge score
/// descending, and truncate to `limit`.
///
/// The sort is stable: candidates tied on both keys keep their input
/// order, and identical inputs always produce the identical page.
pub fn rank(mut candidates: Vec<MatchOutcome>, limit: usize) -> Vec<MatchOutcome> {
    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(b.forge_score.cmp(&a.forge_score))
    });
    candidates.truncate(limit);
    candidates
}
