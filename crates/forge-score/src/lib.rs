//! # forge-score
//!
//! The deterministic forge-score engine. Pure functions over normalized
//! inputs: four weighted dimensions (delivery success 45%, reliability 30%,
//! delivery quality 15%, consistency 10%), a tiered saturating confidence,
//! and the confidence-damped effective score.
//!
//! No I/O, no clock reads, no hidden state: identical inputs produce
//! bit-identical outputs.

pub mod components;
pub mod confidence;
pub mod formula;
pub mod legacy;
pub mod strategy;

pub use strategy::{EvidenceStrategy, LegacyStrategy};
