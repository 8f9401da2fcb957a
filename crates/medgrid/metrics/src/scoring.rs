use serde::{Deserialize, Serialize};
use tracing::debug;

use medgrid_back::Telemetry;
use medgrid_middle::{Constraints, Intent};
use medgrid_optimizer::{AiMode, Decision};

/// Penalty per millisecond of latency over budget.
const LATENCY_OVERRUN_PENALTY: f64 = 2.0;
/// Penalty per percentage point of packet loss.
const LOSS_PENALTY: f64 = 8.0;
/// Flat penalty when coverage failed.
const COVERAGE_PENALTY: i64 = 15;

/// Normalized goal-attainment indices, each in [0,100].
///
/// `operational_cost` is inverted: higher means cheaper to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeIndex {
    pub mission_success: u32,
    pub operational_cost: u32,
    pub stability: u32,
}

/// Score one completed cycle.
///
/// The intent is part of the published interface for forward compatibility;
/// the current formula reads only telemetry, decision, and constraints.
pub fn score(
    telemetry: &Telemetry,
    decision: &Decision,
    constraints: &Constraints,
    _intent: &Intent,
) -> OutcomeIndex {
    let mut mission: i64 = 100;
    let overrun = (telemetry.latency_ms - constraints.latency_budget_ms as f64).max(0.0);
    mission -= (overrun * LATENCY_OVERRUN_PENALTY) as i64;
    mission -= (telemetry.loss_pct * LOSS_PENALTY) as i64;
    if !telemetry.coverage_ok {
        mission -= COVERAGE_PENALTY;
    }

    let cost_penalty = decision.expected_cost.energy * 2.0 + decision.expected_cost.ops * 2.0;
    let operational = 100 - cost_penalty as i64;

    let mut stability: i64 = 90;
    if decision.ai_mode == AiMode::Aggressive {
        stability -= 20;
    }
    stability -= (constraints.uncertainty * 15.0) as i64;

    let outcome = OutcomeIndex {
        mission_success: clamp_index(mission),
        operational_cost: clamp_index(operational),
        stability: clamp_index(stability),
    };

    debug!(
        mission = outcome.mission_success,
        cost = outcome.operational_cost,
        stability = outcome.stability,
        "scored cycle outcome"
    );
    outcome
}

fn clamp_index(value: i64) -> u32 {
    value.clamp(0, 100) as u32
}
