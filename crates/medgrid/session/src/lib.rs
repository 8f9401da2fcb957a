//! Session context: the one explicitly-owned home of all mutable pipeline
//! state (memory tiers, history log, last decision) and the driver that runs
//! one full decision cycle to completion before the next begins.
//!
//! Single-writer by construction: every push into front memory goes through
//! `PipelineSession::run_cycle`, which holds `&mut self` for the whole cycle.
//! A concurrent ingest extension would put one session behind one mutex or
//! one owning task; the tier invariants need nothing more.

pub mod history;
pub mod session;

pub use history::{CycleRecord, HistoryLog};
pub use session::{PipelineSession, SessionConfig};
