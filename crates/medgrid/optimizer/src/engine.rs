use tracing::debug;

use medgrid_middle::{Constraints, Intent, UrgencyContext};

use crate::decision::{AiMode, Decision, ExpectedCost, ExpectedGain, SliceId, RIS_ZONE};

/// Uncertainty at or above which the RIS boost becomes eligible.
const RIS_UNCERTAINTY_MIN: f64 = 0.6;
/// Cost penalty weight above which the RIS boost is disabled.
const RIS_COST_WEIGHT_MAX: f64 = 0.25;

/// Select the network configuration for one cycle.
///
/// Deterministic and total: slice and mode follow the urgency context. The
/// RIS boost activates only under high uncertainty AND low cost sensitivity;
/// either condition failing disables it, favoring cost when ambiguous.
pub fn decide(intent: &Intent, constraints: &Constraints) -> Decision {
    let (slice_id, ai_mode) = match intent.context {
        UrgencyContext::EmergencyCritical => (SliceId::Urllc, AiMode::Aggressive),
        UrgencyContext::EmergencySuspect => (SliceId::Urllc, AiMode::Assist),
        UrgencyContext::NormalMonitoring => (SliceId::Embb, AiMode::Baseline),
    };

    let ris_active = constraints.uncertainty >= RIS_UNCERTAINTY_MIN
        && constraints.penalty_weights.cost <= RIS_COST_WEIGHT_MAX;
    let ris_zone = if ris_active { RIS_ZONE } else { "OFF" };

    let decision = Decision {
        slice_id,
        ris_zone: ris_zone.to_string(),
        ris_active,
        ai_mode,
        expected_gain: expected_gain(slice_id, ris_active, ai_mode),
        expected_cost: expected_cost(ris_active, ai_mode),
    };

    debug!(
        slice = %decision.slice_id,
        mode = %decision.ai_mode,
        ris = decision.ris_active,
        "selected network configuration"
    );
    decision
}

/// Anticipated-effect lookup keyed by the chosen slice/boost/mode combination.
fn expected_gain(slice_id: SliceId, ris_active: bool, ai_mode: AiMode) -> ExpectedGain {
    ExpectedGain {
        latency_ms: match slice_id {
            SliceId::Urllc => 12.0,
            SliceId::Embb => 2.0,
        },
        loss_pct: if ris_active { 1.5 } else { 0.4 },
        jitter_ms: if ai_mode != AiMode::Baseline { 10.0 } else { 2.0 },
    }
}

fn expected_cost(ris_active: bool, ai_mode: AiMode) -> ExpectedCost {
    ExpectedCost {
        energy: if ris_active { 12.0 } else { 1.0 },
        ops: match ai_mode {
            AiMode::Aggressive => 8.0,
            AiMode::Assist => 4.0,
            AiMode::Baseline => 1.0,
        },
    }
}
