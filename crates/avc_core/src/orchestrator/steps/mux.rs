//! MuxVideo step - lays the concatenated audio over the looped video.

use crate::ffmpeg::FfmpegArgs;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{Context, MuxOutput, RunState};

use super::run_ffmpeg;

/// Runs call #2 with the intermediate recorded by ConcatAudio.
pub struct MuxVideoStep;

impl MuxVideoStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MuxVideoStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for MuxVideoStep {
    fn name(&self) -> &str {
        "MuxVideo"
    }

    fn description(&self) -> &str {
        "Loop video to the audio length and mux"
    }

    fn validate_input(&self, _ctx: &Context, state: &RunState) -> StepResult<()> {
        if state.intermediate().is_none() {
            return Err(StepError::invalid_input(
                "Concatenated audio not available (ConcatAudio must run first)",
            ));
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut RunState) -> StepResult<()> {
        let intermediate = state
            .intermediate()
            .ok_or_else(|| StepError::invalid_input("Concatenated audio not available"))?
            .to_path_buf();
        let output_path = ctx.output_path().to_path_buf();

        ctx.logger.info(&format!(
            "Muxing {} with {}",
            ctx.selection.video_path.display(),
            intermediate.display()
        ));

        let args = FfmpegArgs::mux(
            &ctx.selection.video_path,
            &intermediate,
            &output_path,
            &ctx.encoding,
        );
        let exit_code = run_ffmpeg(ctx, &args)?;

        state.mux = Some(MuxOutput {
            output_path,
            exit_code,
        });
        Ok(())
    }

    /// Success is ffmpeg's exit status alone; the output file is not checked.
    fn validate_output(&self, _ctx: &Context, state: &RunState) -> StepResult<()> {
        state
            .mux
            .as_ref()
            .ok_or_else(|| StepError::invalid_output("Mux output not recorded"))?;
        Ok(())
    }
}
