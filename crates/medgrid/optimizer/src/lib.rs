//! Optimizer stage: the final decision authority.
//!
//! A deterministic rule set over (intent, constraints) selects the network
//! configuration for one cycle: slice, AI scheduling mode, and the selective
//! RIS coverage boost. The constraint model upstream only provides bounds;
//! the decision is made here, and it is total, every input produces one.

pub mod decision;
pub mod engine;

pub use decision::{AiMode, Decision, ExpectedCost, ExpectedGain, SliceId, RIS_ZONE};
pub use engine::decide;
