use serde::{Deserialize, Serialize};

fn short_hex() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Unique identifier for a raw ingest record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawId(pub String);

impl RawId {
    /// Generate a new short-form raw id.
    pub fn new() -> Self {
        Self(short_hex())
    }
}

impl Default for RawId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "raw-{}", self.0)
    }
}

/// Unique identifier for a normalized standard event.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

impl EventId {
    /// Generate a new short-form event id.
    pub fn new() -> Self {
        Self(short_hex())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "evt-{}", self.0)
    }
}
