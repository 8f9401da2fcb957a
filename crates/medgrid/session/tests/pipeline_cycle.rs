//! End-to-end cycle tests over the full pipeline: raw report in, scored
//! outcome and effect cards out, with memory and history persisting across
//! cycles.

use medgrid_ingest::{care_note, for_kind, wearable_spike};
use medgrid_session::{PipelineSession, SessionConfig};
use medgrid_types::{IngestError, RawIngest, RawPayload, Signal, SourceKind};

fn session() -> PipelineSession {
    PipelineSession::new(SessionConfig::default())
}

fn vitals(text: &str) -> RawIngest {
    RawIngest::new(RawPayload::VitalsTrace { text: text.into() })
}

#[test]
fn wearable_spike_scenario() {
    let mut session = session();
    let record = session
        .run_cycle(vitals("ECG: 180bpm, SpO2=85%, noise=0.12"))
        .unwrap();

    assert!(record.event.has_signal(Signal::Tachycardia));
    assert!(record.event.has_signal(Signal::Spo2Drop));
    assert!((record.event.severity - 0.75).abs() < f64::EPSILON);
    assert_eq!(record.intent.context.label(), "EMERGENCY_SUSPECT");
    assert_eq!(record.decision.slice_id.label(), "URLLC");
    assert_eq!(record.decision.ai_mode.label(), "Assist");
    assert_eq!(record.event.ttl_sec, 15);
}

#[test]
fn critical_events_always_get_urllc_aggressive() {
    let mut session = session();

    let fall = RawIngest::new(RawPayload::Mobility {
        subject: "C2".into(),
        fall_detected: true,
        location: "ICU_entry".into(),
        confidence: 0.9,
        note: "in transit".into(),
    });
    let chest_pain = RawIngest::new(RawPayload::CareNote {
        text: "CARE_NOTE[A]: \"Complains of chest pain. Appears unstable.\"".into(),
    });

    for raw in [fall, chest_pain] {
        let record = session.run_cycle(raw).unwrap();
        assert!(record.event.severity >= 0.82);
        assert_eq!(record.intent.context.label(), "EMERGENCY_CRITICAL");
        assert_eq!(record.decision.slice_id.label(), "URLLC");
        assert_eq!(record.decision.ai_mode.label(), "Aggressive");
    }
}

#[test]
fn network_degradation_scenario() {
    let mut session = session();
    let raw = RawIngest::new(RawPayload::LinkQuality {
        link: "private5g-b3".into(),
        rssi_dbm: -85,
        loss_pct: 3.0,
        jitter_ms: 20.0,
        scope: "subject_A".into(),
    });
    let record = session.run_cycle(raw).unwrap();

    assert!(record.event.has_signal(Signal::PacketLossRising));
    assert!(record.event.has_signal(Signal::JitterRising));
    // Boost activation depends only on the uncertainty/cost-weight rule,
    // never on which signals fired.
    let expected = record.constraints.uncertainty >= 0.6
        && record.constraints.penalty_weights.cost <= 0.25;
    assert_eq!(record.decision.ris_active, expected);
}

#[test]
fn memory_window_holds_min_of_pushes_and_capacity() {
    let mut session = PipelineSession::new(SessionConfig {
        hot_max: 5,
        ..SessionConfig::default()
    });

    for i in 0..12u32 {
        let pushes = (i + 1).min(5) as usize;
        session.run_cycle(wearable_spike("A")).unwrap();
        assert_eq!(session.memory().hot_len(), pushes);
        assert_eq!(session.warm_summary().count, pushes);
    }
    // Cold outlives the hot window.
    assert_eq!(session.memory().cold_len(), 12);
}

#[test]
fn warm_summary_idempotent_without_intervening_push() {
    let mut session = session();
    session.run_cycle(care_note("A")).unwrap();
    session.run_cycle(wearable_spike("A")).unwrap();
    assert_eq!(session.warm_summary(), session.warm_summary());
}

#[test]
fn mis_tagged_ingest_rejected_without_side_effects() {
    let mut session = session();
    let mut raw = vitals("ECG: 180bpm, SpO2=85%");
    raw.source_kind = SourceKind::Note;

    let err = session.run_cycle(raw).unwrap_err();
    assert!(matches!(err, IngestError::PayloadMismatch { .. }));
    assert!(session.memory().is_empty());
    assert!(session.history().is_empty());
    assert_eq!(session.cycles_run(), 0);
}

#[test]
fn history_is_bounded_and_newest_first() {
    let mut session = PipelineSession::new(SessionConfig {
        history_max: 3,
        ..SessionConfig::default()
    });
    for _ in 0..5 {
        session.run_cycle(wearable_spike("A")).unwrap();
    }
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.history().latest().unwrap().cycle, 5);
    let cycles: Vec<u64> = session.history().snapshot().iter().map(|r| r.cycle).collect();
    assert_eq!(cycles, vec![5, 4, 3]);
}

#[test]
fn outcome_indices_clamped_across_mixed_load() {
    let mut session = session();
    let kinds = [
        SourceKind::Wearable,
        SourceKind::Note,
        SourceKind::MobilityApp,
        SourceKind::Network,
    ];
    for i in 0..40 {
        let record = session.run_cycle(for_kind(kinds[i % 4], "A")).unwrap();
        assert!(record.outcome.mission_success <= 100);
        assert!(record.outcome.operational_cost <= 100);
        assert!(record.outcome.stability <= 100);
        assert!((record.constraints.penalty_weights.sum() - 1.0).abs() < 1e-9);
        assert_eq!(record.effects.len(), 3);
    }
}

#[test]
fn session_retains_last_decision_for_display() {
    let mut session = session();
    assert!(session.last_decision().is_none());
    assert!(session.last_constraints().is_none());

    let record = session.run_cycle(wearable_spike("A")).unwrap();
    assert_eq!(
        session.last_decision().unwrap().slice_id,
        record.decision.slice_id
    );
    assert_eq!(
        session.last_constraints().unwrap().latency_budget_ms,
        record.constraints.latency_budget_ms
    );
}

#[test]
fn bracketed_note_overrides_default_subject() {
    let mut session = session();
    let record = session.run_cycle(care_note("B7")).unwrap();
    assert_eq!(record.event.subject_id, "B7");
    assert_eq!(record.intent.subject_id, "B7");
}

#[test]
fn cycle_records_serialize_for_reporting() {
    let mut session = session();
    let record = session.run_cycle(wearable_spike("A")).unwrap();
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"mission_success\""));
    assert!(json.contains("\"cause\""));
}
