use serde::{Deserialize, Serialize};

use medgrid_types::{StandardEvent, CRITICAL_SEVERITY, EMERGENCY_SEVERITY};

/// Coarse severity-derived urgency bucket.
///
/// Drives both constraint derivation and the decision rules; both must go
/// through `UrgencyContext::from_severity` so they cannot disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyContext {
    EmergencyCritical,
    EmergencySuspect,
    NormalMonitoring,
}

impl UrgencyContext {
    /// The single shared context function.
    pub fn from_severity(severity: f64) -> Self {
        if severity >= CRITICAL_SEVERITY {
            Self::EmergencyCritical
        } else if severity >= EMERGENCY_SEVERITY {
            Self::EmergencySuspect
        } else {
            Self::NormalMonitoring
        }
    }

    /// Context of a normalized event.
    pub fn of(event: &StandardEvent) -> Self {
        Self::from_severity(event.severity)
    }

    /// Whether this context belongs to the emergency family.
    pub fn is_emergency(&self) -> bool {
        matches!(self, Self::EmergencyCritical | Self::EmergencySuspect)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EmergencyCritical => "EMERGENCY_CRITICAL",
            Self::EmergencySuspect => "EMERGENCY_SUSPECT",
            Self::NormalMonitoring => "NORMAL_MONITORING",
        }
    }
}

impl std::fmt::Display for UrgencyContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
