//! Core domain types for Compass - no IO, no async.
//!
//! The assessment domain is small and fixed: ten life pillars, each with a
//! current score, a target score, an importance weight, and a set of chosen
//! practices. This crate defines the static pillar catalog and the mutable
//! per-pillar record; everything that computes or persists lives in
//! `compass-engine`.

mod catalog;
mod level;
mod record;

pub use catalog::{PILLAR_COUNT, PillarDefinition, catalog, find_pillar};
pub use level::PriorityLevel;
pub use record::{PillarRecord, ScoreKind};
