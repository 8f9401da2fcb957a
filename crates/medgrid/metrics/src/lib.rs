//! Scoring and effect mapping.
//!
//! Converts one cycle's telemetry + decision into normalized goal-attainment
//! indices (mission success, cost efficiency, stability, each clamped to
//! [0,100]) and into human-readable cause/effect statements for reporting.
//! The indices are distinct from raw telemetry KPIs: they measure how well
//! the cycle met its goals, not what the link did.

pub mod effects;
pub mod scoring;

pub use effects::{map_effects, EffectCard};
pub use scoring::{score, OutcomeIndex};
