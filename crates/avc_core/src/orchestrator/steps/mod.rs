//! Pipeline step implementations.
//!
//! A run is two ffmpeg calls: concatenate the audio, then mux it onto the
//! looped video.

mod concat;
mod mux;

pub use concat::ConcatAudioStep;
pub use mux::MuxVideoStep;

use std::ffi::OsString;
use std::io;

use crate::ffmpeg::{display_command, FFMPEG};
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::types::Context;

/// Run ffmpeg with `args`, mirroring its output into the run log.
///
/// Returns the exit code on success. On failure the tail of ffmpeg's output
/// is written to the run log before the error is returned.
fn run_ffmpeg(ctx: &Context, args: &[OsString]) -> StepResult<i32> {
    ctx.logger.command(&display_command(&ctx.ffmpeg, args));

    let output = ctx.runner.run(&ctx.ffmpeg, args).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            StepError::tool_not_found(format!("{}: {}", ctx.ffmpeg.display(), e))
        } else {
            StepError::io_error("executing ffmpeg", e)
        }
    })?;

    for line in output.stdout.lines() {
        ctx.logger.output_line(line, false);
    }
    for line in output.stderr.lines() {
        ctx.logger.output_line(line, true);
    }

    if !output.success() {
        ctx.logger.show_tail("ffmpeg output");
        let last_line = output
            .stderr
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("no error output");
        return Err(StepError::command_failed(
            FFMPEG,
            output.exit_code.unwrap_or(-1),
            last_line,
        ));
    }

    ctx.logger.clear_tail();
    Ok(output.exit_code.unwrap_or_default())
}
