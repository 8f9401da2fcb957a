use thiserror::Error;

use crate::source::SourceKind;

/// Errors raised at the ingest validation boundary.
///
/// This is the only failure class in the core: a raw ingest that cannot be
/// trusted must be rejected before normalization, never coerced to a source
/// kind; mis-tagging would silently produce a wrong-signal event.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("raw ingest missing required field `source_kind`")]
    MissingSourceKind,

    #[error("unknown source kind: {0}")]
    UnknownSourceKind(String),

    #[error("payload shape {payload} does not match declared source kind {declared}")]
    PayloadMismatch {
        declared: SourceKind,
        payload: SourceKind,
    },

    #[error("malformed raw ingest: {0}")]
    Malformed(#[from] serde_json::Error),
}
