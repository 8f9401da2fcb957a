//! Middle stage: context, intent, and constraint derivation.
//!
//! Maps a normalized event to (a) an `Intent` describing what the subject
//! needs and (b) a `Constraints` envelope bounding what the optimizer may do:
//! budgets, weights, and an uncertainty estimate. The constraint model
//! never chooses a network action itself; it only sets bounds.
//!
//! Both intent and constraints branch on the same severity-derived
//! `UrgencyContext`, computed by one shared function so the two stages cannot
//! diverge.

pub mod constraints;
pub mod context;
pub mod intent;

pub use constraints::{ConstraintModel, Constraints, PenaltyWeights, RuleConstraintModel};
pub use context::UrgencyContext;
pub use intent::{derive_intent, Intent, IntentType};
