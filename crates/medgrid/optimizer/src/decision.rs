use serde::{Deserialize, Serialize};

/// Fixed designator for the selective RIS coverage zone.
pub const RIS_ZONE: &str = "Zone_B3";

/// Named network-service profile selected per cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliceId {
    /// Ultra-reliable low-latency slice.
    Urllc,
    /// Broadband best-effort slice.
    Embb,
}

impl SliceId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Urllc => "URLLC",
            Self::Embb => "eMBB",
        }
    }
}

impl std::fmt::Display for SliceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Scheduling-aggressiveness level applied to the chosen slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiMode {
    Baseline,
    Assist,
    Aggressive,
}

impl AiMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::Assist => "Assist",
            Self::Aggressive => "Aggressive",
        }
    }
}

impl std::fmt::Display for AiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Anticipated (not measured) improvement from applying a decision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpectedGain {
    pub latency_ms: f64,
    pub loss_pct: f64,
    pub jitter_ms: f64,
}

/// Anticipated resource cost of applying a decision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpectedCost {
    pub energy: f64,
    pub ops: f64,
}

/// One cycle's network configuration. Pure function of (intent, constraints);
/// no hidden state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Decision {
    pub slice_id: SliceId,
    /// `Zone_B3` when the boost is active, `OFF` otherwise.
    pub ris_zone: String,
    pub ris_active: bool,
    pub ai_mode: AiMode,
    pub expected_gain: ExpectedGain,
    pub expected_cost: ExpectedCost,
}
