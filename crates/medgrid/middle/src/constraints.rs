use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use medgrid_types::StandardEvent;

use crate::context::UrgencyContext;

/// Penalty weights over the three optimization axes. Sum to 1.0 per tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PenaltyWeights {
    pub latency: f64,
    pub loss: f64,
    pub cost: f64,
}

impl PenaltyWeights {
    pub fn sum(&self) -> f64 {
        self.latency + self.loss + self.cost
    }
}

/// Per-event optimization envelope: budgets, weights, uncertainty.
///
/// Bounds only; the decision itself belongs to the optimizer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub latency_budget_ms: u32,
    pub reliability_target: f64,
    pub penalty_weights: PenaltyWeights,
    /// Model uncertainty in [0,1]; high values make the selective coverage
    /// boost eligible downstream.
    pub uncertainty: f64,
}

/// Substitution seam for the constraint-generating model.
///
/// The shipped implementation is a deterministic rule table with randomized
/// uncertainty standing in for a learned model; a real model drops in here
/// without touching pipeline logic.
pub trait ConstraintModel {
    fn derive(&self, event: &StandardEvent) -> Constraints;
}

/// Rule-table constraint model keyed on the shared urgency context.
#[derive(Clone, Debug, Default)]
pub struct RuleConstraintModel;

impl RuleConstraintModel {
    pub fn new() -> Self {
        Self
    }
}

impl ConstraintModel for RuleConstraintModel {
    fn derive(&self, event: &StandardEvent) -> Constraints {
        let context = UrgencyContext::of(event);
        let mut rng = rand::thread_rng();

        let constraints = match context {
            UrgencyContext::EmergencyCritical => Constraints {
                latency_budget_ms: 8,
                reliability_target: 0.99999,
                penalty_weights: PenaltyWeights {
                    latency: 0.55,
                    loss: 0.30,
                    cost: 0.15,
                },
                uncertainty: round2(rng.gen_range(0.65..0.9)),
            },
            UrgencyContext::EmergencySuspect => Constraints {
                latency_budget_ms: 12,
                reliability_target: 0.9999,
                penalty_weights: PenaltyWeights {
                    latency: 0.45,
                    loss: 0.30,
                    cost: 0.25,
                },
                uncertainty: round2(rng.gen_range(0.45..0.75)),
            },
            UrgencyContext::NormalMonitoring => Constraints {
                latency_budget_ms: 40,
                reliability_target: 0.999,
                penalty_weights: PenaltyWeights {
                    latency: 0.20,
                    loss: 0.20,
                    cost: 0.60,
                },
                uncertainty: round2(rng.gen_range(0.10..0.35)),
            },
        };

        debug!(
            context = %context,
            budget_ms = constraints.latency_budget_ms,
            uncertainty = constraints.uncertainty,
            "derived constraints"
        );
        constraints
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use medgrid_types::{EventId, Signal, SizeHint, SourceKind, EMBEDDING_DIM};

    fn event(severity: f64) -> StandardEvent {
        StandardEvent {
            event_id: EventId::new(),
            source_kind: SourceKind::Wearable,
            subject_id: "A".into(),
            event_time: Utc::now(),
            ingest_time: Utc::now(),
            signals: vec![Signal::NormalObservation],
            severity,
            confidence: 0.8,
            embedding: vec![0.0; EMBEDDING_DIM],
            size_hint: SizeHint {
                raw_kb: 0.1,
                packed_kb: 0.05,
            },
            ttl_sec: 60,
        }
    }

    #[test]
    fn critical_tier_table() {
        let c = RuleConstraintModel::new().derive(&event(0.85));
        assert_eq!(c.latency_budget_ms, 8);
        assert!((c.reliability_target - 0.99999).abs() < 1e-9);
        assert!((c.penalty_weights.latency - 0.55).abs() < 1e-9);
        assert!((0.65..=0.9).contains(&c.uncertainty));
    }

    #[test]
    fn suspect_tier_table() {
        let c = RuleConstraintModel::new().derive(&event(0.75));
        assert_eq!(c.latency_budget_ms, 12);
        assert!((c.reliability_target - 0.9999).abs() < 1e-9);
        assert!((c.penalty_weights.cost - 0.25).abs() < 1e-9);
        assert!((0.45..=0.75).contains(&c.uncertainty));
    }

    #[test]
    fn normal_tier_table() {
        let c = RuleConstraintModel::new().derive(&event(0.2));
        assert_eq!(c.latency_budget_ms, 40);
        assert!((c.reliability_target - 0.999).abs() < 1e-9);
        assert!((c.penalty_weights.cost - 0.60).abs() < 1e-9);
        assert!((0.10..=0.35).contains(&c.uncertainty));
    }

    proptest::proptest! {
        #[test]
        fn weights_always_sum_to_one(severity in 0.0f64..1.0) {
            let c = RuleConstraintModel::new().derive(&event(severity));
            proptest::prop_assert!((c.penalty_weights.sum() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn uncertainty_always_in_unit_interval(severity in 0.0f64..1.0) {
            let c = RuleConstraintModel::new().derive(&event(severity));
            proptest::prop_assert!((0.0..=1.0).contains(&c.uncertainty));
        }

        #[test]
        fn tighter_budget_for_higher_urgency(severity in 0.0f64..1.0) {
            let c = RuleConstraintModel::new().derive(&event(severity));
            let expected = match UrgencyContext::from_severity(severity) {
                UrgencyContext::EmergencyCritical => 8,
                UrgencyContext::EmergencySuspect => 12,
                UrgencyContext::NormalMonitoring => 40,
            };
            proptest::prop_assert_eq!(c.latency_budget_ms, expected);
        }
    }
}
