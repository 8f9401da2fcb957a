use serde::{Deserialize, Serialize};
use tracing::debug;

use medgrid_types::StandardEvent;

use crate::context::UrgencyContext;

/// What the subject needs from the network this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentType {
    EmergencyCare,
    RoutineMonitoring,
}

impl std::fmt::Display for IntentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmergencyCare => f.write_str("emergency_care"),
            Self::RoutineMonitoring => f.write_str("routine_monitoring"),
        }
    }
}

/// Per-event intent, derived solely from severity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Intent {
    pub intent_type: IntentType,
    pub subject_id: String,
    pub context: UrgencyContext,
}

/// Derive the intent for one normalized event.
pub fn derive_intent(event: &StandardEvent) -> Intent {
    let context = UrgencyContext::of(event);
    let intent_type = if context.is_emergency() {
        IntentType::EmergencyCare
    } else {
        IntentType::RoutineMonitoring
    };
    debug!(subject = %event.subject_id, context = %context, "derived intent");
    Intent {
        intent_type,
        subject_id: event.subject_id.clone(),
        context,
    }
}
