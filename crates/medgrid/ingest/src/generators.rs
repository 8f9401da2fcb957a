use rand::seq::SliceRandom;
use rand::Rng;

use medgrid_types::{RawIngest, RawPayload, SourceKind};

const NOTE_TEXTS: &[&str] = &[
    "Short of breath, skin pale, hands and feet cold",
    "Breathing difficulty reported. SpO2 check needed",
    "Complains of chest pain. Appears unstable.",
    "Cyanosis suspected. Immediate check requested.",
];

const MOBILITY_LOCATIONS: &[&str] = &["ER_gate", "Corridor_B3", "ICU_entry"];

const MOBILITY_NOTES: &[&str] = &[
    "in transit",
    "oxygen being administered",
    "possible reduced consciousness",
];

const NETWORK_LINKS: &[&str] = &["wifi-ward", "private5g-b3", "uplink-core"];

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// A wearable vitals spike: elevated heart rate, depressed SpO2.
pub fn wearable_spike(_subject: &str) -> RawIngest {
    let mut rng = rand::thread_rng();
    let hr = rng.gen_range(120..=170);
    let spo2 = rng.gen_range(82..=92);
    let noise = round2(rng.gen_range(0.05..0.20));
    RawIngest::new(RawPayload::VitalsTrace {
        text: format!("ECG: {hr}bpm, SpO2={spo2}%, noise={noise}"),
    })
}

/// A free-text care note carrying a `CARE_NOTE[<subject>]` tag.
pub fn care_note(subject: &str) -> RawIngest {
    let mut rng = rand::thread_rng();
    let note = NOTE_TEXTS.choose(&mut rng).unwrap();
    RawIngest::new(RawPayload::CareNote {
        text: format!("CARE_NOTE[{subject}]: \"{note}\""),
    })
}

/// A structured mobility/transfer report.
pub fn mobility_ping(subject: &str) -> RawIngest {
    let mut rng = rand::thread_rng();
    RawIngest::new(RawPayload::Mobility {
        subject: subject.to_string(),
        fall_detected: rng.gen_bool(0.5),
        location: MOBILITY_LOCATIONS.choose(&mut rng).unwrap().to_string(),
        confidence: round2(rng.gen_range(0.6..0.95)),
        note: MOBILITY_NOTES.choose(&mut rng).unwrap().to_string(),
    })
}

/// A link-quality probe showing degradation on the serving network.
pub fn link_degradation(subject: &str) -> RawIngest {
    let mut rng = rand::thread_rng();
    RawIngest::new(RawPayload::LinkQuality {
        link: NETWORK_LINKS.choose(&mut rng).unwrap().to_string(),
        rssi_dbm: rng.gen_range(-92..=-65),
        loss_pct: round2(rng.gen_range(0.5..4.0)),
        jitter_ms: round1(rng.gen_range(2.0..30.0)),
        scope: format!("subject_{subject}"),
    })
}

/// Generate one report of the given kind.
pub fn for_kind(kind: SourceKind, subject: &str) -> RawIngest {
    match kind {
        SourceKind::Wearable => wearable_spike(subject),
        SourceKind::Note => care_note(subject),
        SourceKind::MobilityApp => mobility_ping(subject),
        SourceKind::Network => link_degradation(subject),
    }
}
