use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use medgrid_types::{StandardEvent, EMERGENCY_SEVERITY};

/// Configuration for the front memory tiers.
#[derive(Clone, Debug)]
pub struct FrontMemoryConfig {
    /// Maximum events in the hot tier (default: 25).
    pub hot_max: usize,
    /// Maximum records in the cold index (default: 200).
    pub cold_max: usize,
}

impl Default for FrontMemoryConfig {
    fn default() -> Self {
        Self {
            hot_max: 25,
            cold_max: 200,
        }
    }
}

/// Compact long-horizon record kept in the cold index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColdRecord {
    pub severity: f64,
    pub is_emergency: bool,
}

/// On-demand summary of the hot tier.
///
/// Never stored independently: recomputed from the current hot contents on
/// every call, so it cannot drift from them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarmSummary {
    pub count: usize,
    pub avg_severity: f64,
    pub emergency_rate: f64,
}

/// Session-scoped hierarchical memory: hot events, warm summary, cold index.
///
/// Every push into hot produces exactly one push into cold in the same call,
/// so both tiers share insertion order; cold outlives hot's window. Eviction
/// is capacity-based only; event TTLs are retention hints, not expiries.
pub struct FrontMemory {
    hot: VecDeque<StandardEvent>,
    hot_max: usize,
    cold: VecDeque<ColdRecord>,
    cold_max: usize,
}

impl FrontMemory {
    pub fn new(config: FrontMemoryConfig) -> Self {
        Self {
            hot: VecDeque::with_capacity(config.hot_max),
            hot_max: config.hot_max,
            cold: VecDeque::with_capacity(config.cold_max.min(1024)),
            cold_max: config.cold_max,
        }
    }

    /// Push one event: newest-first into hot, mirrored compact record into
    /// cold, oldest evicted from each tier on overflow.
    pub fn push(&mut self, event: StandardEvent) {
        let record = ColdRecord {
            severity: event.severity,
            is_emergency: event.severity >= EMERGENCY_SEVERITY,
        };

        self.hot.push_front(event);
        while self.hot.len() > self.hot_max {
            self.hot.pop_back();
        }

        self.cold.push_front(record);
        while self.cold.len() > self.cold_max {
            self.cold.pop_back();
        }

        debug!(
            hot = self.hot.len(),
            cold = self.cold.len(),
            "pushed event into front memory"
        );
    }

    /// Recompute the warm summary from the current hot contents.
    pub fn warm_summary(&self) -> WarmSummary {
        if self.hot.is_empty() {
            return WarmSummary {
                count: 0,
                avg_severity: 0.0,
                emergency_rate: 0.0,
            };
        }
        let count = self.hot.len();
        let total: f64 = self.hot.iter().map(|e| e.severity).sum();
        let emergencies = self.hot.iter().filter(|e| e.is_emergency()).count();
        WarmSummary {
            count,
            avg_severity: round2(total / count as f64),
            emergency_rate: round2(emergencies as f64 / count as f64),
        }
    }

    /// Current hot tier contents, newest first.
    pub fn hot_snapshot(&self) -> Vec<StandardEvent> {
        self.hot.iter().cloned().collect()
    }

    /// Current cold index contents, newest first.
    pub fn cold_snapshot(&self) -> Vec<ColdRecord> {
        self.cold.iter().copied().collect()
    }

    pub fn hot_len(&self) -> usize {
        self.hot.len()
    }

    pub fn cold_len(&self) -> usize {
        self.cold.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hot.is_empty()
    }
}

impl Default for FrontMemory {
    fn default() -> Self {
        Self::new(FrontMemoryConfig::default())
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
