use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::IngestError;
use crate::ids::RawId;
use crate::source::{RawPayload, SourceKind};

/// One raw situational report. Immutable once created; produced by an ingest
/// adapter (or the synthetic generators) and consumed exactly once by the
/// front normalizer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawIngest {
    pub id: RawId,
    pub source_kind: SourceKind,
    pub ingest_time: DateTime<Utc>,
    pub payload: RawPayload,
}

impl RawIngest {
    /// Create a raw ingest stamped now, with the source kind derived from the
    /// payload shape (so it cannot start out mis-tagged).
    pub fn new(payload: RawPayload) -> Self {
        Self {
            id: RawId::new(),
            source_kind: payload.kind(),
            ingest_time: Utc::now(),
            payload,
        }
    }

    /// Check that the declared source kind matches the payload shape.
    pub fn validate(&self) -> Result<(), IngestError> {
        let payload_kind = self.payload.kind();
        if payload_kind != self.source_kind {
            return Err(IngestError::PayloadMismatch {
                declared: self.source_kind,
                payload: payload_kind,
            });
        }
        Ok(())
    }

    /// Parse a raw ingest from JSON produced by an external adapter.
    ///
    /// The `source_kind` discriminant is checked explicitly before full
    /// deserialization so a missing or unknown kind surfaces as its own
    /// typed error rather than a generic parse failure.
    pub fn from_json(input: &str) -> Result<Self, IngestError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let kind = value
            .get("source_kind")
            .and_then(|v| v.as_str())
            .ok_or(IngestError::MissingSourceKind)?;
        kind.parse::<SourceKind>()?;

        let ingest: RawIngest = serde_json::from_value(value)?;
        ingest.validate()?;
        Ok(ingest)
    }
}
