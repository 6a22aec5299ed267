//! Run processor: turns a `Selection` into a `RunOutcome`.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::ffmpeg::resolve_ffmpeg;
use crate::io::CommandRunner;
use crate::logging::{LogConfig, RunLogger};
use crate::models::{RunId, RunOutcome, Selection};

use super::artifacts::RunArtifacts;
use super::errors::{PipelineError, PipelineResult};
use super::steps::{ConcatAudioStep, MuxVideoStep};
use super::types::{Context, RunState};
use super::Pipeline;

/// Create the two-step pipeline: ConcatAudio, then MuxVideo.
pub fn create_standard_pipeline() -> Pipeline {
    Pipeline::new()
        .with_step(ConcatAudioStep::new())
        .with_step(MuxVideoStep::new())
}

/// Executes runs against a fixed settings snapshot.
///
/// One orchestrator can serve any number of runs; each run gets its own id,
/// log file and temporary files.
pub struct Orchestrator {
    settings: Settings,
    runner: Arc<dyn CommandRunner>,
}

impl Orchestrator {
    pub fn new(settings: Settings, runner: Arc<dyn CommandRunner>) -> Self {
        Self { settings, runner }
    }

    /// Run both ffmpeg calls for `selection`.
    ///
    /// Temporary files are removed whatever the result. Every error maps to
    /// the same user-facing failure; the cause is in the run log.
    pub fn run(&self, selection: &Selection) -> RunOutcome {
        let run_id = RunId::new();
        let run_name = run_id.run_name();
        tracing::info!(run = %run_name, "Starting run with {} audio file(s)", selection.audio_paths.len());

        match self.try_run(&run_id, selection) {
            Ok(output) => {
                tracing::info!(run = %run_name, "Run completed: {}", output.display());
                RunOutcome::Success(output)
            }
            Err(e) => {
                tracing::error!(run = %run_name, "{}", e);
                RunOutcome::processing_failed()
            }
        }
    }

    fn try_run(&self, run_id: &RunId, selection: &Selection) -> PipelineResult<PathBuf> {
        let run_name = run_id.run_name();
        let paths = &self.settings.paths;

        let logger = RunLogger::new(
            &run_name,
            &paths.logs_folder,
            LogConfig::from(&self.settings.logging),
        )
        .map_err(|e| PipelineError::setup_failed(&run_name, format!("creating run log: {}", e)))?;
        let logger = Arc::new(logger);

        let result = self.run_pipeline(run_id, selection, &logger);
        if let Err(ref e) = result {
            logger.error(&e.to_string());
            tracing::warn!(run = %run_name, "Run log: {}", logger.log_path().display());
        }
        logger.flush();
        result
    }

    fn run_pipeline(
        &self,
        run_id: &RunId,
        selection: &Selection,
        logger: &Arc<RunLogger>,
    ) -> PipelineResult<PathBuf> {
        let run_name = run_id.run_name();

        let ffmpeg = resolve_ffmpeg(&self.settings.tools.ffmpeg_path)
            .map_err(|e| PipelineError::setup_failed(&run_name, e.to_string()))?;
        logger.info(&format!("Using ffmpeg: {}", ffmpeg.display()));

        let temp_root = PathBuf::from(&self.settings.paths.temp_root);
        fs::create_dir_all(&temp_root).map_err(|e| {
            PipelineError::setup_failed(
                &run_name,
                format!("creating temp folder {}: {}", temp_root.display(), e),
            )
        })?;

        let audio_ext = selection
            .audio_extension()
            .unwrap_or(self.settings.encoding.audio_extension.as_str());
        let mut artifacts = RunArtifacts::new(&temp_root, run_id, audio_ext);

        let ctx = Context::new(
            selection.clone(),
            self.settings.encoding.clone(),
            &run_name,
            ffmpeg,
            &artifacts,
            Arc::clone(logger),
            Arc::clone(&self.runner),
        );
        let mut state = RunState::new(run_id.to_string());

        let result = create_standard_pipeline().run(&ctx, &mut state);
        artifacts.cleanup();

        if let Ok(json) = serde_json::to_string(&state) {
            logger.debug(&format!("Run state: {}", json));
        }

        let run_result = result?;
        logger.success(&format!(
            "Steps completed: {}",
            run_result.steps_completed.join(", ")
        ));

        Ok(state
            .mux
            .map(|m| m.output_path)
            .unwrap_or_else(|| selection.output_path.clone()))
    }
}

/// Run `selection` on a blocking worker thread.
///
/// A panic inside the run is reported as the generic failure.
pub async fn run_in_background(orchestrator: Arc<Orchestrator>, selection: Selection) -> RunOutcome {
    tokio::task::spawn_blocking(move || orchestrator.run(&selection))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Run task failed: {}", e);
            RunOutcome::processing_failed()
        })
}
