use chrono::Utc;
use tracing::{debug, info};

use medgrid_back::{SimulatedLink, TelemetrySource};
use medgrid_front::{FrontMemory, FrontMemoryConfig, FrontNormalizer, WarmSummary};
use medgrid_metrics::{map_effects, score};
use medgrid_middle::{derive_intent, ConstraintModel, Constraints, RuleConstraintModel};
use medgrid_optimizer::{decide, Decision};
use medgrid_types::{IngestError, RawIngest};

use crate::history::{CycleRecord, HistoryLog};

/// Session-level configuration.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Hot tier capacity.
    pub hot_max: usize,
    /// Cold index capacity.
    pub cold_max: usize,
    /// History log display bound.
    pub history_max: usize,
    /// Subject id used when a report names none.
    pub default_subject: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hot_max: 25,
            cold_max: 200,
            history_max: 50,
            default_subject: "A".into(),
        }
    }
}

/// The single owning pipeline context.
///
/// Holds every piece of session-scoped mutable state (front memory via the
/// normalizer, history, last constraints/decision) and drives one strictly
/// sequential cycle per raw report: validate, normalize, derive, decide,
/// execute, score.
pub struct PipelineSession {
    normalizer: FrontNormalizer,
    model: Box<dyn ConstraintModel>,
    telemetry: Box<dyn TelemetrySource>,
    history: HistoryLog,
    last_constraints: Option<Constraints>,
    last_decision: Option<Decision>,
    cycles_run: u64,
}

impl PipelineSession {
    /// Session with the shipped rule-table model and simulated link.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_components(
            config,
            Box::new(RuleConstraintModel::new()),
            Box::new(SimulatedLink::new()),
        )
    }

    /// Session with substituted model and/or telemetry boundaries.
    pub fn with_components(
        config: SessionConfig,
        model: Box<dyn ConstraintModel>,
        telemetry: Box<dyn TelemetrySource>,
    ) -> Self {
        let memory_config = FrontMemoryConfig {
            hot_max: config.hot_max,
            cold_max: config.cold_max,
        };
        Self {
            normalizer: FrontNormalizer::new(memory_config, config.default_subject),
            model,
            telemetry,
            history: HistoryLog::new(config.history_max),
            last_constraints: None,
            last_decision: None,
            cycles_run: 0,
        }
    }

    /// Run one full decision cycle for a raw report.
    ///
    /// The report is validated before anything else touches it; a mis-tagged
    /// or malformed ingest is rejected here and leaves no trace in memory.
    pub fn run_cycle(&mut self, raw: RawIngest) -> Result<CycleRecord, IngestError> {
        raw.validate()?;
        debug!(raw = %raw.id, source = %raw.source_kind, "starting decision cycle");

        let event = self.normalizer.normalize(&raw);
        let intent = derive_intent(&event);
        let constraints = self.model.derive(&event);
        let decision = decide(&intent, &constraints);
        let telemetry = self.telemetry.observe(&decision);
        let outcome = score(&telemetry, &decision, &constraints, &intent);
        let effects = map_effects(&decision);

        self.cycles_run += 1;
        let record = CycleRecord {
            cycle: self.cycles_run,
            raw_id: raw.id.clone(),
            event,
            intent,
            constraints,
            decision: decision.clone(),
            telemetry,
            outcome,
            effects,
            completed_at: Utc::now(),
        };

        self.last_constraints = Some(constraints);
        self.last_decision = Some(decision);
        self.history.push(record.clone());

        info!(
            cycle = record.cycle,
            context = %record.intent.context,
            slice = %record.decision.slice_id,
            mission = record.outcome.mission_success,
            "completed decision cycle"
        );
        Ok(record)
    }

    /// The tiered front memory (read-only; pushes happen inside `run_cycle`).
    pub fn memory(&self) -> &FrontMemory {
        self.normalizer.memory()
    }

    /// Warm summary of the hot tier.
    pub fn warm_summary(&self) -> WarmSummary {
        self.memory().warm_summary()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Constraints of the most recent cycle, retained for display.
    pub fn last_constraints(&self) -> Option<&Constraints> {
        self.last_constraints.as_ref()
    }

    /// Decision of the most recent cycle, retained for display.
    pub fn last_decision(&self) -> Option<&Decision> {
        self.last_decision.as_ref()
    }

    pub fn cycles_run(&self) -> u64 {
        self.cycles_run
    }
}
