use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use medgrid_back::Telemetry;
use medgrid_metrics::{EffectCard, OutcomeIndex};
use medgrid_middle::{Constraints, Intent};
use medgrid_optimizer::Decision;
use medgrid_types::{RawId, StandardEvent};

/// Immutable snapshot of one completed decision cycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CycleRecord {
    /// 1-based cycle counter within the session.
    pub cycle: u64,
    pub raw_id: RawId,
    pub event: StandardEvent,
    pub intent: Intent,
    pub constraints: Constraints,
    pub decision: Decision,
    pub telemetry: Telemetry,
    pub outcome: OutcomeIndex,
    pub effects: Vec<EffectCard>,
    pub completed_at: DateTime<Utc>,
}

/// Append-only, newest-first, bounded-for-display log of cycle snapshots.
/// Consumed by reporting collaborators only; the pipeline never reads it.
pub struct HistoryLog {
    records: VecDeque<CycleRecord>,
    max_records: usize,
}

impl HistoryLog {
    pub fn new(max_records: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_records.min(256)),
            max_records,
        }
    }

    /// Append one record, evicting the oldest past the display bound.
    pub fn push(&mut self, record: CycleRecord) {
        self.records.push_front(record);
        while self.records.len() > self.max_records {
            self.records.pop_back();
        }
    }

    /// Most recent record, if any.
    pub fn latest(&self) -> Option<&CycleRecord> {
        self.records.front()
    }

    /// All retained records, newest first.
    pub fn snapshot(&self) -> Vec<&CycleRecord> {
        self.records.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(50)
    }
}
