//! Synthetic ingest boundary.
//!
//! One generator per source kind, each producing a randomized but
//! source-plausible `RawIngest`. Generation always succeeds and has no side
//! effect beyond randomness. A production deployment replaces this crate with
//! a real ingest adapter exposing the same `RawIngest` contract.

pub mod generators;

pub use generators::{care_note, for_kind, link_degradation, mobility_ping, wearable_spike};
