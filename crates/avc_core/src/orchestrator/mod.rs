//! Pipeline orchestrator for a single combine run.
//!
//! # Architecture
//!
//! ```text
//! Orchestrator::run(selection)
//!     ├── resolve ffmpeg, open run log, create temp folder
//!     ├── Pipeline
//!     │     ├── Step: ConcatAudio   (manifest + call #1)
//!     │     └── Step: MuxVideo      (call #2)
//!     └── remove temp files
//! ```

mod artifacts;
mod errors;
mod pipeline;
mod processor;
mod step;
pub mod steps;
#[cfg(test)]
pub(crate) mod testing;
mod types;

pub use artifacts::RunArtifacts;
pub use errors::{PipelineError, PipelineResult, StepError, StepResult};
pub use pipeline::{Pipeline, PipelineRunResult};
pub use processor::{create_standard_pipeline, run_in_background, Orchestrator};
pub use step::PipelineStep;
pub use steps::{ConcatAudioStep, MuxVideoStep};
pub use types::{ConcatOutput, Context, MuxOutput, RunState};
