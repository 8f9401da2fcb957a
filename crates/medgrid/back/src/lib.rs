//! Back stage: apply, then observe.
//!
//! Simulates the telemetry that results from applying a decision. The
//! observation is not controllable and not retried; the core treats the
//! telemetry source as a black box, so a real network-apply boundary can
//! replace the simulation without touching pipeline logic.

pub mod source;
pub mod telemetry;

pub use source::{execute, SimulatedLink, TelemetrySource};
pub use telemetry::Telemetry;
