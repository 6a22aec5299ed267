//! AVC Core - Backend logic for Audio Video Combiner
//!
//! This crate contains all business logic with zero UI dependencies:
//! configuration, logging, the Idle/Running workflow, and the ffmpeg
//! orchestrator that concatenates audio and muxes it onto a looped video.

pub mod config;
pub mod ffmpeg;
pub mod io;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod workflow;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
