/// Repository-layer errors. Read failures are surfaced to the caller,
/// never silently turned into empty result sets.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} `{id}` not found")]
    NotFound { entity: &'static str, id: String },

    #[error("query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("write conflict on {entity} `{id}`: {reason}")]
    WriteConflict {
        entity: &'static str,
        id: String,
        reason: String,
    },
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}
