//! Test fixtures for the Forge workspace: model constructors with sane
//! defaults and in-memory repository implementations used by integration
//! tests across crates.

pub mod builders;
pub mod repos;

pub use builders::{
    make_activity, make_builder, make_delivery, make_evidence, make_invitation, make_membership,
    make_project,
};
pub use repos::InMemoryStore;
