//! ffmpeg argument lists for the concat and mux calls.

use std::ffi::OsString;
use std::path::Path;

use crate::config::EncodingSettings;

/// Builder for ffmpeg argument lists.
///
/// Both calls start with `-hide_banner -y`: the user has already confirmed
/// any overwrite, and ffmpeg must never stop to ask.
#[derive(Debug, Default)]
pub struct FfmpegArgs {
    args: Vec<OsString>,
}

impl FfmpegArgs {
    fn new() -> Self {
        Self::default().flag("-hide_banner").flag("-y")
    }

    /// Call #1: stream-copy every manifest entry into one audio file.
    pub fn concat(manifest: &Path, intermediate: &Path) -> Vec<OsString> {
        Self::new()
            .opt("-f", "concat")
            .opt("-safe", "0")
            .opt("-i", manifest)
            .opt("-c", "copy")
            .path(intermediate)
            .build()
    }

    /// Call #2: loop the video and lay the concatenated audio over it.
    ///
    /// `-shortest` makes the audio length the output length; the video is
    /// copied, the audio re-encoded with the configured codec.
    pub fn mux(
        video: &Path,
        intermediate: &Path,
        output: &Path,
        encoding: &EncodingSettings,
    ) -> Vec<OsString> {
        let mut builder = Self::new()
            .opt("-stream_loop", "-1")
            .opt("-i", video)
            .opt("-i", intermediate)
            .flag("-shortest")
            .opt("-map", "0:v:0")
            .opt("-map", "1:a:0")
            .opt("-c:v", "copy")
            .opt("-c:a", encoding.audio_codec.as_str());

        if encoding.strict_experimental {
            builder = builder.opt("-strict", "experimental");
        }

        builder.path(output).build()
    }

    fn flag(mut self, flag: &str) -> Self {
        self.args.push(flag.into());
        self
    }

    fn opt(mut self, name: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.args.push(name.into());
        self.args.push(value.as_ref().to_os_string());
        self
    }

    fn path(mut self, path: &Path) -> Self {
        self.args.push(path.as_os_str().to_os_string());
        self
    }

    fn build(self) -> Vec<OsString> {
        self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().to_string()).collect()
    }

    #[test]
    fn concat_args() {
        let args = FfmpegArgs::concat(Path::new("/t/concat.txt"), Path::new("/t/combined.mp3"));
        assert_eq!(
            strings(&args),
            vec![
                "-hide_banner", "-y", "-f", "concat", "-safe", "0", "-i", "/t/concat.txt", "-c",
                "copy", "/t/combined.mp3",
            ]
        );
    }

    #[test]
    fn mux_args_with_defaults() {
        let args = FfmpegArgs::mux(
            Path::new("clip.mp4"),
            Path::new("/t/combined.mp3"),
            Path::new("out.mp4"),
            &EncodingSettings::default(),
        );
        assert_eq!(
            strings(&args),
            vec![
                "-hide_banner", "-y", "-stream_loop", "-1", "-i", "clip.mp4", "-i",
                "/t/combined.mp3", "-shortest", "-map", "0:v:0", "-map", "1:a:0", "-c:v", "copy",
                "-c:a", "aac", "-strict", "experimental", "out.mp4",
            ]
        );
    }

    #[test]
    fn mux_without_strict() {
        let encoding = EncodingSettings {
            audio_codec: "libopus".to_string(),
            strict_experimental: false,
            ..EncodingSettings::default()
        };
        let args = strings(&FfmpegArgs::mux(
            Path::new("v.mp4"),
            Path::new("a.mp3"),
            Path::new("o.mp4"),
            &encoding,
        ));
        assert!(!args.contains(&"-strict".to_string()));
        assert!(args.windows(2).any(|w| w == ["-c:a", "libopus"]));
        assert_eq!(args.last().map(String::as_str), Some("o.mp4"));
    }

    #[test]
    fn paths_with_spaces_stay_single_arguments() {
        let args = FfmpegArgs::concat(Path::new("my list.txt"), Path::new("my out.mp3"));
        assert!(args.iter().any(|a| a == "my list.txt"));
        assert!(args.iter().any(|a| a == "my out.mp3"));
    }
}
