use rand::Rng;
use regex::Regex;
use tracing::debug;

use medgrid_types::{
    EventId, RawIngest, RawPayload, Signal, SizeHint, StandardEvent, EMBEDDING_DIM,
    EMERGENCY_SEVERITY,
};

use crate::memory::{FrontMemory, FrontMemoryConfig};

/// Base severity for an unremarkable observation.
const BASE_SEVERITY: f64 = 0.2;
/// Severity assigned when any elevated-risk signal is present.
const ELEVATED_SEVERITY: f64 = 0.75;
/// Severity floor when an acute signal is present.
const ACUTE_SEVERITY: f64 = 0.82;

/// Heart rate at or above which we tag tachycardia.
const TACHYCARDIA_BPM: u32 = 130;
/// SpO2 at or below which we tag a desaturation.
const SPO2_DROP_PCT: u32 = 90;
/// Packet loss at or above which the link counts as degrading.
const LOSS_RISING_PCT: f64 = 2.0;
/// Jitter at or above which the link counts as degrading.
const JITTER_RISING_MS: f64 = 15.0;

/// Front normalizer: converts raw ingests into standard events and pushes
/// each one into the tiered front memory as part of the same call.
pub struct FrontNormalizer {
    memory: FrontMemory,
    default_subject: String,
    re_heart_rate: Regex,
    re_spo2: Regex,
    re_subject_tag: Regex,
}

impl FrontNormalizer {
    pub fn new(config: FrontMemoryConfig, default_subject: impl Into<String>) -> Self {
        Self {
            memory: FrontMemory::new(config),
            default_subject: default_subject.into(),
            // Patterns are fixed literals; construction cannot fail.
            re_heart_rate: Regex::new(r"(\d+)bpm").unwrap(),
            re_spo2: Regex::new(r"SpO2=(\d+)").unwrap(),
            re_subject_tag: Regex::new(r"CARE_NOTE\[(\w+)\]").unwrap(),
        }
    }

    /// Normalize one validated raw ingest into a standard event.
    ///
    /// Total over its input domain: unparseable vitals degrade to safe
    /// baseline values (90 bpm, 97% SpO2) rather than failing. The produced
    /// event is pushed into front memory before being returned.
    pub fn normalize(&mut self, raw: &RawIngest) -> StandardEvent {
        let mut subject_id = self.default_subject.clone();
        let mut signals: Vec<Signal> = Vec::new();

        match &raw.payload {
            RawPayload::VitalsTrace { text } => {
                let heart_rate = self.capture_u32(&self.re_heart_rate, text).unwrap_or(90);
                let spo2 = self.capture_u32(&self.re_spo2, text).unwrap_or(97);
                if heart_rate >= TACHYCARDIA_BPM {
                    signals.push(Signal::Tachycardia);
                }
                if spo2 <= SPO2_DROP_PCT {
                    signals.push(Signal::Spo2Drop);
                }
            }
            RawPayload::CareNote { text } => {
                let lower = text.to_lowercase();
                if lower.contains("cyanosis") || lower.contains("bluish") {
                    signals.push(Signal::CyanosisSuspect);
                }
                if lower.contains("breath") {
                    signals.push(Signal::DyspneaSuspect);
                }
                if lower.contains("chest pain") {
                    signals.push(Signal::ChestPainSuspect);
                }
                if let Some(caps) = self.re_subject_tag.captures(text) {
                    subject_id = caps[1].to_string();
                }
            }
            RawPayload::Mobility {
                subject,
                fall_detected,
                location,
                ..
            } => {
                subject_id = subject.clone();
                if *fall_detected {
                    signals.push(Signal::FallDetected);
                }
                if location.contains("Corridor") || location.contains("ER") {
                    signals.push(Signal::InMotionOrTransfer);
                }
            }
            RawPayload::LinkQuality {
                loss_pct,
                jitter_ms,
                ..
            } => {
                if *loss_pct >= LOSS_RISING_PCT {
                    signals.push(Signal::PacketLossRising);
                }
                if *jitter_ms >= JITTER_RISING_MS {
                    signals.push(Signal::JitterRising);
                }
            }
        }

        if signals.is_empty() {
            signals.push(Signal::NormalObservation);
        }

        let severity = severity_for(&signals);
        let confidence = draw_confidence(severity);
        let size_hint = estimate_sizes(&raw.payload);

        let event = StandardEvent {
            event_id: EventId::new(),
            source_kind: raw.source_kind,
            subject_id,
            event_time: chrono::Utc::now(),
            ingest_time: raw.ingest_time,
            signals,
            severity,
            confidence,
            embedding: stub_embedding(),
            size_hint,
            ttl_sec: if severity >= EMERGENCY_SEVERITY { 15 } else { 60 },
        };

        debug!(
            event = %event.event_id,
            source = %event.source_kind,
            severity = event.severity,
            "normalized raw ingest"
        );

        self.memory.push(event.clone());
        event
    }

    /// The tiered memory owned by this normalizer.
    pub fn memory(&self) -> &FrontMemory {
        &self.memory
    }

    fn capture_u32(&self, re: &Regex, text: &str) -> Option<u32> {
        re.captures(text)?.get(1)?.as_str().parse().ok()
    }
}

/// Severity policy over the extracted signal set.
fn severity_for(signals: &[Signal]) -> f64 {
    let mut severity = BASE_SEVERITY;
    if signals.iter().any(Signal::is_elevated_risk) {
        severity = ELEVATED_SEVERITY;
    }
    if signals.iter().any(Signal::is_acute) {
        severity = severity.max(ACUTE_SEVERITY);
    }
    severity
}

/// Confidence band: tighter and higher for emergencies.
fn draw_confidence(severity: f64) -> f64 {
    let mut rng = rand::thread_rng();
    let c: f64 = if severity >= EMERGENCY_SEVERITY {
        rng.gen_range(0.70..0.95)
    } else {
        rng.gen_range(0.60..0.90)
    };
    (c * 100.0).round() / 100.0
}

/// Size hints from the serialized payload: packed is a fixed fraction of raw,
/// both floor-bounded, both monotonic in payload length.
fn estimate_sizes(payload: &RawPayload) -> SizeHint {
    // Serialization of a closed variant with plain fields cannot fail.
    let serialized = serde_json::to_string(payload).unwrap_or_default();
    let raw_kb = (serialized.len() as f64 / 1024.0).max(0.1);
    let packed_kb = (raw_kb * 0.08).max(0.05);
    SizeHint {
        raw_kb: round2(raw_kb),
        packed_kb: round2(packed_kb),
    }
}

/// Fixed-length stand-in for a real feature embedding; only the shape and the
/// [-1,1] bound carry meaning.
fn stub_embedding() -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..EMBEDDING_DIM)
        .map(|_| round2(rng.gen_range(-1.0..1.0)))
        .collect()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
