//! Normalized standard events and their signal tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::EventId;
use crate::source::SourceKind;

/// Severity at or above which an event counts as an emergency.
pub const EMERGENCY_SEVERITY: f64 = 0.70;

/// Severity at or above which an event counts as critical.
pub const CRITICAL_SEVERITY: f64 = 0.82;

/// Length of the stand-in feature embedding.
pub const EMBEDDING_DIM: usize = 8;

/// Signal tags extracted by the front normalizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Tachycardia,
    Spo2Drop,
    CyanosisSuspect,
    DyspneaSuspect,
    ChestPainSuspect,
    FallDetected,
    InMotionOrTransfer,
    PacketLossRising,
    JitterRising,
    /// Emitted alone when nothing else matched.
    NormalObservation,
}

impl Signal {
    /// Wire tag for this signal.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Tachycardia => "tachycardia",
            Self::Spo2Drop => "spo2_drop",
            Self::CyanosisSuspect => "cyanosis_suspect",
            Self::DyspneaSuspect => "dyspnea_suspect",
            Self::ChestPainSuspect => "chest_pain_suspect",
            Self::FallDetected => "fall_detected",
            Self::InMotionOrTransfer => "in_motion_or_transfer",
            Self::PacketLossRising => "packet_loss_rising",
            Self::JitterRising => "jitter_rising",
            Self::NormalObservation => "normal_observation",
        }
    }

    /// Whether this signal raises severity to the elevated band.
    pub fn is_elevated_risk(&self) -> bool {
        matches!(
            self,
            Self::Tachycardia
                | Self::Spo2Drop
                | Self::CyanosisSuspect
                | Self::PacketLossRising
                | Self::JitterRising
        )
    }

    /// Whether this signal forces at least the critical band.
    pub fn is_acute(&self) -> bool {
        matches!(self, Self::ChestPainSuspect | Self::FallDetected)
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Serialized-size estimate for an event's payload, in kilobytes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeHint {
    pub raw_kb: f64,
    pub packed_kb: f64,
}

/// A normalized event: created from exactly one `RawIngest`, immutable
/// thereafter, owned by the memory tiers and the cycle that produced it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardEvent {
    pub event_id: EventId,
    pub source_kind: SourceKind,
    pub subject_id: String,
    pub event_time: DateTime<Utc>,
    pub ingest_time: DateTime<Utc>,
    /// Ordered, duplicate-free signal tags.
    pub signals: Vec<Signal>,
    /// Urgency in [0,1].
    pub severity: f64,
    /// Extraction confidence in [0,1].
    pub confidence: f64,
    /// Fixed-length stand-in feature embedding, values in [-1,1].
    pub embedding: Vec<f64>,
    pub size_hint: SizeHint,
    /// Retention priority hint in seconds. A hint only: no tier currently
    /// evicts by TTL, eviction is capacity-based.
    pub ttl_sec: u32,
}

impl StandardEvent {
    /// Whether this event sits in the emergency band.
    pub fn is_emergency(&self) -> bool {
        self.severity >= EMERGENCY_SEVERITY
    }

    /// Whether a specific signal was extracted.
    pub fn has_signal(&self, signal: Signal) -> bool {
        self.signals.contains(&signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_with(severity: f64, signals: Vec<Signal>) -> StandardEvent {
        StandardEvent {
            event_id: EventId::new(),
            source_kind: SourceKind::Wearable,
            subject_id: "A".into(),
            event_time: Utc::now(),
            ingest_time: Utc::now(),
            signals,
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
    fn emergency_band_boundary() {
        assert!(!event_with(0.69, vec![Signal::NormalObservation]).is_emergency());
        assert!(event_with(0.70, vec![Signal::Tachycardia]).is_emergency());
    }

    #[test]
    fn signal_risk_classes() {
        assert!(Signal::Spo2Drop.is_elevated_risk());
        assert!(Signal::PacketLossRising.is_elevated_risk());
        assert!(!Signal::DyspneaSuspect.is_elevated_risk());
        assert!(!Signal::NormalObservation.is_elevated_risk());

        assert!(Signal::ChestPainSuspect.is_acute());
        assert!(Signal::FallDetected.is_acute());
        assert!(!Signal::Tachycardia.is_acute());
    }

    #[test]
    fn signal_tags_serialize_as_snake_case() {
        let json = serde_json::to_string(&Signal::Spo2Drop).unwrap();
        assert_eq!(json, "\"spo2_drop\"");
        let json = serde_json::to_string(&Signal::PacketLossRising).unwrap();
        assert_eq!(json, "\"packet_loss_rising\"");
    }

    #[test]
    fn has_signal_lookup() {
        let ev = event_with(0.75, vec![Signal::Tachycardia, Signal::Spo2Drop]);
        assert!(ev.has_signal(Signal::Tachycardia));
        assert!(!ev.has_signal(Signal::FallDetected));
    }

    #[test]
    fn event_serialization_roundtrip() {
        let ev = event_with(0.82, vec![Signal::ChestPainSuspect]);
        let json = serde_json::to_string(&ev).unwrap();
        let restored: StandardEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.event_id, ev.event_id);
        assert_eq!(restored.signals, ev.signals);
    }
}
