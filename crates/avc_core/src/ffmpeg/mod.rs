//! ffmpeg command contracts.
//!
//! Two calls make up a run:
//!
//! ```text
//! #1  ffmpeg -f concat -safe 0 -i <manifest> -c copy <intermediate>
//! #2  ffmpeg -stream_loop -1 -i <video> -i <intermediate> -shortest
//!            -map 0:v:0 -map 1:a:0 -c:v copy -c:a aac <output>
//! ```

mod args;
mod manifest;
mod tool;

pub use args::FfmpegArgs;
pub use manifest::{manifest_line, write_manifest};
pub use tool::{resolve_ffmpeg, FFMPEG};

use std::ffi::OsString;

/// Render arguments as a single shell-like line for the run log.
pub fn display_command(program: &std::path::Path, args: &[OsString]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        let arg = arg.to_string_lossy();
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push('"');
            line.push_str(&arg);
            line.push('"');
        } else {
            line.push_str(&arg);
        }
    }
    line
}
