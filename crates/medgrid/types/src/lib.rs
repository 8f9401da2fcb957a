//! Shared schema for the medgrid decision pipeline.
//!
//! Defines the two record types that cross every stage boundary, `RawIngest`
//! (opaque multi-source report) and `StandardEvent` (normalized, signal-tagged
//! event), plus the identifiers, source kinds, and the single typed failure
//! class of the core: ingest validation.
//!
//! Everything downstream of `RawIngest::validate` is total over its input
//! domain; malformed content degrades to default-safe values inside the
//! normalizer instead of failing.

pub mod error;
pub mod event;
pub mod ids;
pub mod ingest;
pub mod source;

pub use error::IngestError;
pub use event::{
    SizeHint, Signal, StandardEvent, CRITICAL_SEVERITY, EMBEDDING_DIM, EMERGENCY_SEVERITY,
};
pub use ids::{EventId, RawId};
pub use ingest::RawIngest;
pub use source::{RawPayload, SourceKind};
