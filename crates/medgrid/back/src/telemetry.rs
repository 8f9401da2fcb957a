use serde::{Deserialize, Serialize};

/// Observed network metrics after applying a decision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub latency_ms: f64,
    pub loss_pct: f64,
    pub jitter_ms: f64,
    pub coverage_ok: bool,
}
