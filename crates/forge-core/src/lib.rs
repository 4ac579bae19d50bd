//! # forge-core
//!
//! Foundation crate for the Forge scoring and matching engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod cache;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ForgeConfig;
pub use errors::{ForgeError, ForgeResult};
pub use models::{
    Availability, Builder, Delivery, DeliveryStatus, Evidence, EvidenceType, ForgeScoreRecord,
    Invitation, InvitationStatus, OverallStatus, Project, ScoreInputs, SkillSet,
    VerificationRecord,
};
