//! Front stage: normalization and hierarchical memory.
//!
//! The normalizer converts one `RawIngest` into one `StandardEvent` via
//! exhaustive per-source signal extraction, a severity/confidence policy,
//! size hints, and a stand-in embedding, then pushes the event into the
//! tiered front memory as part of the same call.
//!
//! The memory keeps the hierarchy at the FRONT of the pipeline: a bounded hot
//! tier of recent events, a warm summary recomputed on demand, and a longer
//! bounded cold index of compact records.

pub mod memory;
pub mod normalizer;

pub use memory::{ColdRecord, FrontMemory, FrontMemoryConfig, WarmSummary};
pub use normalizer::FrontNormalizer;
