//! Theme constants for Audio Video Combiner.

use iced::Color;

/// Text colors.
pub mod colors {
    use super::Color;

    /// Selection labels
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.40, 0.40, 0.40);

    /// Status line while processing
    pub const PROCESSING: Color = Color::from_rgb(0.24, 0.35, 0.50);
}

/// Spacing constants.
pub mod spacing {
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (20px)
    pub const LG: f32 = 20.0;
}

/// Font sizes.
pub mod font {
    pub const STATUS: f32 = 16.0;
    pub const LABEL: f32 = 13.0;
}

/// Widget sizes.
pub mod size {
    /// Width of the action buttons
    pub const BUTTON_WIDTH: f32 = 220.0;
}
