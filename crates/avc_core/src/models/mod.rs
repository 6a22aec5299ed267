//! Data models for Audio Video Combiner.
//!
//! All entities are transient and scoped to a single run:
//! - `Selection`: the three user inputs handed to the orchestrator
//! - `RunId`: unique identifier used to name per-run artifacts
//! - `RunOutcome`: tagged success/failure result of a run

mod outcome;
mod selection;

pub use outcome::{RunId, RunOutcome, PROCESSING_FAILED_MESSAGE};
pub use selection::{Selection, ValidationError};
