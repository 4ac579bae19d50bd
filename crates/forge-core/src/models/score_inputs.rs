use serde::{Deserialize, Serialize};

/// Everything the score engine needs about a builder, normalized from raw
/// rows by the evidence aggregator. All counts are unsigned, so out-of-range
/// input is unrepresentable past the aggregation boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreInputs {
    pub delivery: DeliveryStats,
    pub reliability: ReliabilityCounts,
    /// One record per verified delivery.
    pub quality: Vec<QualityRecord>,
    pub consistency: ConsistencyInputs,
    pub confidence: ConfidenceInputs,
}

/// Verified-delivery counts feeding the delivery-success dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryStats {
    pub verified: u32,
    /// Verified deliveries whose active period spans at least 90 days.
    pub sustained: u32,
    /// Verified deliveries whose parent project reached "completed".
    pub team_completed: u32,
}

/// Counts feeding the reliability dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliabilityCounts {
    pub total_deliveries: u32,
    /// Completed or verified.
    pub completed_deliveries: u32,
    pub dropped_deliveries: u32,
    pub projects_joined: u32,
    pub projects_completed: u32,
    /// Memberships whose parent project was cancelled or archived.
    pub projects_abandoned: u32,
    /// Not yet modeled; no data source populates this. Kept as a named
    /// input so one can be added without touching the engine interface.
    pub projects_no_show: u32,
}

/// Per-verified-delivery quality inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityRecord {
    pub signals: VerificationSignals,
    pub depth: DepthFlags,
    pub sustained_90_days: bool,
    pub ownership: OwnershipSignals,
    /// Days between creation and last update, floor-divided; at least 1
    /// when any update occurred, capped at 30.
    pub update_windows: u32,
}

/// Tri-state verification signals. `None` means "no evidence to judge",
/// which is different from an assessed failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSignals {
    pub deployment_reachable: Option<bool>,
    pub repo_exists: Option<bool>,
    pub contribution_evidence: Option<bool>,
    pub timeline_evidence: Option<bool>,
    pub collaborator_attested: Option<bool>,
}

impl VerificationSignals {
    fn all(&self) -> [Option<bool>; 5] {
        [
            self.deployment_reachable,
            self.repo_exists,
            self.contribution_evidence,
            self.timeline_evidence,
            self.collaborator_attested,
        ]
    }

    /// Signals with any evidence to judge.
    pub fn assessed(&self) -> u32 {
        self.all().iter().filter(|s| s.is_some()).count() as u32
    }

    /// Signals that passed.
    pub fn passed(&self) -> u32 {
        self.all().iter().filter(|s| **s == Some(true)).count() as u32
    }
}

/// Boolean feature vector from keyword classification of a delivery's
/// stack tags and title. More flags set means a richer system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthFlags {
    pub auth: bool,
    pub database: bool,
    pub api: bool,
    pub integrations: bool,
    pub payments: bool,
    pub background_jobs: bool,
}

impl DepthFlags {
    pub fn count(&self) -> u32 {
        [
            self.auth,
            self.database,
            self.api,
            self.integrations,
            self.payments,
            self.background_jobs,
        ]
        .iter()
        .filter(|f| **f)
        .count() as u32
    }
}

/// Ownership heuristics derived from URL presence. These are weak proxies,
/// not true ownership checks; isolated here so a real attestation source
/// can replace them without touching delivery-quality scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipSignals {
    pub deployment_owner: Option<bool>,
    pub domain_owner: Option<bool>,
    pub primary_operator: Option<bool>,
}

/// Inputs feeding the consistency dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyInputs {
    pub deliveries_last_6_months: u32,
    /// Cardinality of the de-duplicated week-index set touched by a
    /// completion or activity event in the trailing 12 months.
    pub active_weeks_last_12: u32,
    /// Days since the most recent qualifying event; 365 when none exists.
    pub recency_days: u32,
}

impl Default for ConsistencyInputs {
    fn default() -> Self {
        Self {
            deliveries_last_6_months: 0,
            active_weeks_last_12: 0,
            recency_days: crate::constants::RECENCY_DEFAULT_DAYS,
        }
    }
}

/// Inputs feeding the confidence calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceInputs {
    pub verified_deliveries: u32,
    pub sustained_deliveries: u32,
    /// Builders who share a team with this builder, excluding self.
    pub distinct_collaborators: u32,
    /// Project memberships whose project reached a terminal status.
    pub outcomes: u32,
}

/// The four coarse inputs of the legacy scoring model. Derivable from
/// `ScoreInputs` when only the fallback path is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyInputs {
    pub verified_deliveries: u32,
    pub total_deliveries: u32,
    pub completed_deliveries: u32,
    pub dropped_deliveries: u32,
    pub team_deliveries: u32,
    pub total_teams: u32,
    pub active_months: u32,
    pub consecutive_active_months: u32,
}

impl LegacyInputs {
    /// Coarsen rich inputs down to the legacy view. Months are approximated
    /// from active weeks; the streak is unknown at this granularity and
    /// approximated from recency (a fresh builder keeps a 1-month streak).
    pub fn coarsen(inputs: &ScoreInputs) -> Self {
        Self {
            verified_deliveries: inputs.delivery.verified,
            total_deliveries: inputs.reliability.total_deliveries,
            completed_deliveries: inputs.reliability.completed_deliveries,
            dropped_deliveries: inputs.reliability.dropped_deliveries,
            team_deliveries: inputs.delivery.team_completed,
            total_teams: inputs.reliability.projects_joined,
            active_months: inputs.consistency.active_weeks_last_12 / 4,
            consecutive_active_months: if inputs.consistency.recency_days < 30 {
                1
            } else {
                0
            },
        }
    }
}
