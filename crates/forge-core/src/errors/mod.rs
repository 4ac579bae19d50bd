pub mod repository_error;
pub mod scorer_error;

pub use repository_error::RepositoryError;
pub use scorer_error::SkillScorerError;

/// Workspace-wide result alias.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Top-level error, one variant per subsystem.
#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    SkillScorer(#[from] SkillScorerError),

    #[error("config error: {reason}")]
    Config { reason: String },
}

impl ForgeError {
    /// Whether this error maps to a 404-equivalent at the boundary.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Repository(RepositoryError::NotFound { .. })
        )
    }
}
