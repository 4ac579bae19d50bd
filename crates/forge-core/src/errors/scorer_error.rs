/// Errors from the external AI skill scorer. Opaque to this core: no retry
/// or timeout policy here, the caller layer owns that.
#[derive(Debug, thiserror::Error)]
pub enum SkillScorerError {
    #[error("skill scorer unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("skill scorer returned a malformed response: {reason}")]
    MalformedResponse { reason: String },
}
