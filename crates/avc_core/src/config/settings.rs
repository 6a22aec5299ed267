//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// External tool locations.
    #[serde(default)]
    pub tools: ToolSettings,

    /// File types and codec choices.
    #[serde(default)]
    pub encoding: EncodingSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Path configuration for temp files, logs, and remembered dialog folders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Root folder for per-run temporary files.
    #[serde(default = "default_temp_root")]
    pub temp_root: String,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,

    /// Folder of the last audio selection.
    #[serde(default)]
    pub last_audio_folder: String,

    /// Folder of the last video selection.
    #[serde(default)]
    pub last_video_folder: String,

    /// Folder of the last chosen output file.
    #[serde(default)]
    pub last_output_folder: String,
}

fn default_temp_root() -> String {
    ".temp".to_string()
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            temp_root: default_temp_root(),
            logs_folder: default_logs_folder(),
            last_audio_folder: String::new(),
            last_video_folder: String::new(),
            last_output_folder: String::new(),
        }
    }
}

/// External tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Explicit ffmpeg executable. Empty means look it up on PATH.
    #[serde(default)]
    pub ffmpeg_path: String,
}

/// Extension filters and the audio codec used when muxing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingSettings {
    /// Extension offered by the audio picker.
    #[serde(default = "default_audio_extension")]
    pub audio_extension: String,

    /// Extension offered by the video picker.
    #[serde(default = "default_video_extension")]
    pub video_extension: String,

    /// Extension of the output file (also appended when the user omits one).
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Codec the concatenated audio is re-encoded to.
    #[serde(default = "default_audio_codec")]
    pub audio_codec: String,

    /// Pass `-strict experimental` to the mux call.
    #[serde(default = "default_true")]
    pub strict_experimental: bool,
}

fn default_audio_extension() -> String {
    "mp3".to_string()
}

fn default_video_extension() -> String {
    "mp4".to_string()
}

fn default_output_extension() -> String {
    "mp4".to_string()
}

fn default_audio_codec() -> String {
    "aac".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EncodingSettings {
    fn default() -> Self {
        Self {
            audio_extension: default_audio_extension(),
            video_extension: default_video_extension(),
            output_extension: default_output_extension(),
            audio_codec: default_audio_codec(),
            strict_experimental: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Keep ffmpeg output out of the run log unless a call fails.
    #[serde(default = "default_true")]
    pub compact: bool,

    /// Number of ffmpeg output lines kept for the failure tail.
    #[serde(default = "default_error_tail")]
    pub error_tail: u32,

    /// Prefix run log lines with a timestamp.
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
}

fn default_error_tail() -> u32 {
    20
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            compact: true,
            error_tail: default_error_tail(),
            show_timestamps: true,
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Paths,
    Tools,
    Encoding,
    Logging,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 4] = [
        ConfigSection::Paths,
        ConfigSection::Tools,
        ConfigSection::Encoding,
        ConfigSection::Logging,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Tools => "tools",
            ConfigSection::Encoding => "encoding",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the section in a freshly generated file.
    pub fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "# Working directories and remembered dialog folders",
            ConfigSection::Tools => "# External tools (empty ffmpeg_path = search PATH)",
            ConfigSection::Encoding => "# File types and output audio codec",
            ConfigSection::Logging => "# Run log configuration",
        }
    }
}
