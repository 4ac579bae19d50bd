//! # forge-evidence
//!
//! Evidence aggregator: reads a builder's deliveries, verifications,
//! evidence, team memberships, and activity events through the repository
//! traits and normalizes them into [`forge_core::models::ScoreInputs`].
//!
//! No side effects. Read failures surface to the caller; retry and backoff
//! belong to the persistence layer, not here.

pub mod aggregator;
pub mod consistency;
pub mod delivery_stats;
pub mod depth;
pub mod ownership;
pub mod quality;
pub mod reliability;

pub use aggregator::{AggregationContext, EvidenceAggregator};
pub use depth::DepthClassifier;
