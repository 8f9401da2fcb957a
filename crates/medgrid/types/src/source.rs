//! Source kinds and the closed payload variants they carry.
//!
//! Every raw report declares exactly one `SourceKind`, and its payload is a
//! closed tagged variant rather than an open blob, so the normalizer's
//! branch-by-source logic is exhaustive-checked pattern matching.

use serde::{Deserialize, Serialize};

use crate::error::IngestError;

/// Origin of a raw situational report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Body-worn sensor emitting a vitals trace.
    Wearable,
    /// Free-text care note written by staff.
    Note,
    /// Transport/mobility companion app.
    MobilityApp,
    /// Link-quality probe on the serving network.
    Network,
}

impl SourceKind {
    /// Wire label for this source kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wearable => "wearable",
            Self::Note => "note",
            Self::MobilityApp => "mobility_app",
            Self::Network => "network",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for SourceKind {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wearable" => Ok(Self::Wearable),
            "note" => Ok(Self::Note),
            "mobility_app" => Ok(Self::MobilityApp),
            "network" => Ok(Self::Network),
            other => Err(IngestError::UnknownSourceKind(other.to_string())),
        }
    }
}

/// Payload of a raw ingest: one closed variant per source kind.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum RawPayload {
    /// Free-form vitals trace, e.g. `"ECG: 142bpm, SpO2=88%, noise=0.12"`.
    VitalsTrace { text: String },

    /// Free-text care note, optionally carrying a `CARE_NOTE[<subject>]` tag.
    CareNote { text: String },

    /// Structured mobility/transfer report.
    Mobility {
        subject: String,
        fall_detected: bool,
        location: String,
        confidence: f64,
        note: String,
    },

    /// Structured link-quality metrics.
    LinkQuality {
        link: String,
        rssi_dbm: i32,
        loss_pct: f64,
        jitter_ms: f64,
        scope: String,
    },
}

impl RawPayload {
    /// The source kind this payload shape belongs to.
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::VitalsTrace { .. } => SourceKind::Wearable,
            Self::CareNote { .. } => SourceKind::Note,
            Self::Mobility { .. } => SourceKind::MobilityApp,
            Self::LinkQuality { .. } => SourceKind::Network,
        }
    }
}
