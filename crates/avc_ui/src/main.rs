//! Audio Video Combiner - Main entry point
//!
//! Loads configuration, sets up logging, and launches the iced application.

use std::path::PathBuf;

use avc_core::config::ConfigManager;
use avc_core::logging::{init_tracing_with_file, LogLevel};

mod app;
mod handlers;
mod theme;
mod windows;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Config first: it names the logs directory
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);
    let config_error = config_manager.load_or_create().err();

    let logs_dir = config_manager.logs_folder();
    let _log_guard = init_tracing_with_file(LogLevel::Info, &logs_dir);

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
    }

    tracing::info!("Audio Video Combiner starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", avc_core::version());

    if let Err(e) = config_manager.ensure_dirs_exist() {
        tracing::error!("Failed to create directories: {}", e);
    }

    iced::application(move || App::new(config_manager.clone()), App::update, App::view)
        .title(app::WINDOW_TITLE)
        .subscription(App::subscription)
        .window_size(app::WINDOW_SIZE)
        .run()
}
