//! ConcatAudio step - joins the selected audio files with ffmpeg's concat demuxer.

use crate::ffmpeg::{write_manifest, FfmpegArgs};
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{ConcatOutput, Context, RunState};

use super::run_ffmpeg;

/// Writes the manifest and runs call #1.
///
/// Streams are copied, not re-encoded, so the inputs must share a codec.
pub struct ConcatAudioStep;

impl ConcatAudioStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConcatAudioStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for ConcatAudioStep {
    fn name(&self) -> &str {
        "ConcatAudio"
    }

    fn description(&self) -> &str {
        "Concatenate audio tracks into one file"
    }

    fn validate_input(&self, ctx: &Context, _state: &RunState) -> StepResult<()> {
        if ctx.selection.audio_paths.is_empty() {
            return Err(StepError::invalid_input("No audio files selected"));
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<()> {
        let audio = &ctx.selection.audio_paths;
        ctx.logger
            .info(&format!("Concatenating {} audio file(s)", audio.len()));

        write_manifest(&ctx.manifest_path, audio)
            .map_err(|e| StepError::io_error("writing concat manifest", e))?;
        ctx.logger
            .debug(&format!("Manifest: {}", ctx.manifest_path.display()));

        let args = FfmpegArgs::concat(&ctx.manifest_path, &ctx.intermediate_path);
        run_ffmpeg(ctx, &args)?;

        state.concat = Some(ConcatOutput {
            manifest_path: ctx.manifest_path.clone(),
            intermediate_path: ctx.intermediate_path.clone(),
            track_count: audio.len(),
        });
        Ok(())
    }

    fn validate_output(&self, _ctx: &Context, state: &RunState) -> StepResult<()> {
        let intermediate = state
            .intermediate()
            .ok_or_else(|| StepError::invalid_output("Concatenated audio not recorded"))?;

        if !intermediate.exists() {
            return Err(StepError::invalid_output(format!(
                "Concatenated audio was not created: {}",
                intermediate.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::testing::{test_context, RecordingRunner};
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn writes_manifest_and_runs_concat() {
        let dir = tempdir().unwrap();
        let runner = Arc::new(RecordingRunner::succeeding());
        let (ctx, _artifacts) = test_context(dir.path(), runner.clone());
        let mut state = RunState::new("t");

        let step = ConcatAudioStep::new();
        step.validate_input(&ctx, &state).unwrap();
        step.execute(&ctx, &mut state).unwrap();
        step.validate_output(&ctx, &state).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        let manifest = calls[0].manifest.as_deref().unwrap();
        assert_eq!(manifest.lines().count(), 2);
        assert!(manifest.lines().next().unwrap().ends_with("a.mp3'"));
        assert_eq!(state.concat.as_ref().unwrap().track_count, 2);
        assert_eq!(state.intermediate(), Some(ctx.intermediate_path.as_path()));
    }

    #[test]
    fn failed_call_records_nothing() {
        let dir = tempdir().unwrap();
        let (ctx, _artifacts) =
            test_context(dir.path(), Arc::new(RecordingRunner::failing_on(0)));
        let mut state = RunState::new("t");

        let err = ConcatAudioStep::new().execute(&ctx, &mut state).unwrap_err();

        assert!(matches!(err, StepError::CommandFailed { exit_code: 1, .. }));
        assert!(state.concat.is_none());
    }

    #[test]
    fn missing_tool_is_tool_not_found() {
        let dir = tempdir().unwrap();
        let runner = RecordingRunner::spawn_error(std::io::ErrorKind::NotFound);
        let (ctx, _artifacts) = test_context(dir.path(), Arc::new(runner));

        let err = ConcatAudioStep::new()
            .execute(&ctx, &mut RunState::new("t"))
            .unwrap_err();

        assert!(matches!(err, StepError::ToolNotFound(_)));
    }
}
