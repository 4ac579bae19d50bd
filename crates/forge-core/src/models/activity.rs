use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A timestamped platform action by a builder (delivery update, comment,
/// check-in). Only the timestamp matters for consistency scoring.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivityEvent {
    pub builder_id: String,
    pub occurred_at: DateTime<Utc>,
    pub kind: String,
}
